// Frontend wiring and frame tuning constants.
// Scene and animation tuning lives in `globe_core::constants`.

// DOM
pub const CANVAS_ID: &str = "globe-canvas";
pub const QUAKE_LABEL_ID: &str = "quake-label";
pub const LABEL_VISIBLE_CLASS: &str = "visible";

// Label follows the pulse alpha; hide once it fades below this
pub const LABEL_HIDE_ALPHA: f32 = 0.05;

// Render
pub const CLEAR_COLOR: [f64; 4] = [0.01, 0.012, 0.03, 1.0];
pub const RING_ALPHA_MAX: f32 = 0.55;
pub const NEBULA_ALPHA_MAX: f32 = 0.7;
pub const NEBULA_DRIFT_PER_SEC: f32 = 0.004;
pub const QUAKE_RIPPLE_SPEED: f32 = 2.6; // radians per second of the marker sine wave
pub const QUAKE_RIPPLE_AMOUNT: f32 = 0.3; // fraction of marker size

