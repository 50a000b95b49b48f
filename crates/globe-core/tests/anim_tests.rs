use globe_core::anim::*;

#[test]
fn every_ease_starts_at_zero_and_ends_at_one() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
    }
}

#[test]
fn eases_clamp_out_of_range_progress() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn monotonic_eases_do_not_overshoot() {
    for ease in Ease::ALL.into_iter().filter(|e| *e != Ease::BackOut) {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "{ease:?} not monotonic at {i}");
            assert!(v <= 1.0 + 1e-6);
            prev = v;
        }
    }
}

#[test]
fn back_out_overshoots_then_settles() {
    let peak = (0..=100)
        .map(|i| Ease::BackOut.apply(i as f32 / 100.0))
        .fold(0.0, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn tween_holds_before_delay_and_after_end() {
    let t = Tween::new(2.0, 10.0, 1.0, Ease::Linear).delayed(0.5);
    assert_eq!(t.value_at(0.0), 2.0);
    assert_eq!(t.value_at(0.5), 2.0);
    assert!((t.value_at(1.0) - 6.0).abs() < 1e-5);
    assert_eq!(t.value_at(1.5), 10.0);
    assert_eq!(t.value_at(99.0), 10.0);
    assert!((t.end() - 1.5).abs() < 1e-6);
}

#[test]
fn zero_duration_tween_jumps_at_delay() {
    let t = Tween::new(0.0, 1.0, 0.0, Ease::CubicIn).delayed(2.0);
    assert_eq!(t.value_at(1.99), 0.0);
    assert_eq!(t.value_at(2.0), 1.0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    Alpha,
    Scale,
    Unused,
}

#[test]
fn timeline_sequences_tweens_on_one_key() {
    let mut tl = Timeline::new();
    tl.add(Key::Alpha, Tween::new(0.0, 1.0, 1.0, Ease::Linear))
        .add(Key::Alpha, Tween::new(1.0, 0.0, 1.0, Ease::Linear).delayed(2.0))
        .add(Key::Scale, Tween::new(1.0, 2.0, 4.0, Ease::Linear));

    assert!((tl.value(Key::Alpha, 0.5).unwrap() - 0.5).abs() < 1e-5);
    // hold between the two tweens
    assert!((tl.value(Key::Alpha, 1.5).unwrap() - 1.0).abs() < 1e-5);
    assert!((tl.value(Key::Alpha, 2.5).unwrap() - 0.5).abs() < 1e-5);
    assert!((tl.value(Key::Alpha, 3.5).unwrap()).abs() < 1e-5);
    assert!((tl.value(Key::Scale, 2.0).unwrap() - 1.5).abs() < 1e-5);
    assert_eq!(tl.value(Key::Unused, 1.0), None);
    assert_eq!(tl.value_or(Key::Unused, 1.0, 7.0), 7.0);
}

#[test]
fn timeline_picks_started_tween_regardless_of_insertion_order() {
    let mut tl = Timeline::new();
    tl.add(Key::Alpha, Tween::new(10.0, 20.0, 1.0, Ease::Linear).delayed(2.0))
        .add(Key::Alpha, Tween::new(0.0, 1.0, 1.0, Ease::Linear));

    assert!((tl.value(Key::Alpha, 0.5).unwrap() - 0.5).abs() < 1e-5);
    assert!((tl.value(Key::Alpha, 1.5).unwrap() - 1.0).abs() < 1e-5);
    assert!((tl.value(Key::Alpha, 2.5).unwrap() - 15.0).abs() < 1e-5);
}

#[test]
fn timeline_holds_earliest_tween_before_anything_starts() {
    let mut tl = Timeline::new();
    tl.add(Key::Alpha, Tween::new(5.0, 6.0, 1.0, Ease::Linear).delayed(3.0))
        .add(Key::Alpha, Tween::new(2.0, 3.0, 1.0, Ease::Linear).delayed(1.0));
    assert_eq!(tl.value(Key::Alpha, 0.0), Some(2.0));
}

#[test]
fn timeline_equal_delays_prefer_last_added() {
    let mut tl = Timeline::new();
    tl.add(Key::Scale, Tween::new(0.0, 1.0, 1.0, Ease::Linear))
        .add(Key::Scale, Tween::new(4.0, 4.0, 1.0, Ease::Linear));
    assert_eq!(tl.value(Key::Scale, 0.5), Some(4.0));
}

#[test]
fn timeline_duration_is_latest_end() {
    let mut tl = Timeline::new();
    assert_eq!(tl.duration(), 0.0);
    tl.add(Key::Alpha, Tween::new(0.0, 1.0, 1.0, Ease::Linear).delayed(3.0))
        .add(Key::Scale, Tween::new(0.0, 1.0, 2.5, Ease::Linear));
    assert!((tl.duration() - 4.0).abs() < 1e-6);
    assert!(!tl.is_complete(3.9));
    assert!(tl.is_complete(4.0));
}
