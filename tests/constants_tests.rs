// Host-side tests for the frontend constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_plain_identifiers() {
    for id in [CANVAS_ID, QUAKE_LABEL_ID, LABEL_VISIBLE_CLASS] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
    assert_ne!(CANVAS_ID, QUAKE_LABEL_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_normalized() {
    assert!(RING_ALPHA_MAX > 0.0 && RING_ALPHA_MAX <= 1.0);
    assert!(NEBULA_ALPHA_MAX > 0.0 && NEBULA_ALPHA_MAX <= 1.0);
    assert!(LABEL_HIDE_ALPHA > 0.0 && LABEL_HIDE_ALPHA < 0.5);
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn marker_ripple_never_inverts_size() {
    // size is scaled by (1 + amount * sin), so amount must stay below 1
    assert!(QUAKE_RIPPLE_AMOUNT > 0.0 && QUAKE_RIPPLE_AMOUNT < 1.0);
    assert!(QUAKE_RIPPLE_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn nebula_drift_is_slow() {
    // less than one texture wrap per minute
    assert!(NEBULA_DRIFT_PER_SEC > 0.0);
    assert!(NEBULA_DRIFT_PER_SEC * 60.0 < 1.0);
}
