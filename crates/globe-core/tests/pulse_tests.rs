use glam::Vec3;
use globe_core::constants::*;
use globe_core::geo::lat_lng_to_vec3;
use globe_core::pulse::*;
use globe_core::quake::{Earthquake, QuakeCatalog};

fn quake_at(lat: f32, lng: f32) -> Earthquake {
    Earthquake {
        magnitude: 5.0,
        place: String::new(),
        lat,
        lng,
        depth_km: 0.0,
        time_ms: 0,
        pos: lat_lng_to_vec3(lat, lng),
        feature: serde_json::Value::Null,
    }
}

fn catalog() -> QuakeCatalog {
    QuakeCatalog::from_quakes(vec![
        quake_at(0.0, -90.0), // +Z
        quake_at(10.0, -80.0),
        quake_at(0.0, 90.0), // -Z, never facing
        quake_at(-10.0, -100.0),
    ])
}

#[test]
fn first_pulse_waits_for_initial_delay() {
    let mut s = PulseScheduler::new(1);
    let c = catalog();
    assert_eq!(s.update(0.0, &c, Vec3::Z), None);
    assert_eq!(s.update(FIRST_PULSE_DELAY_SEC - 0.01, &c, Vec3::Z), None);
    assert!(s.update(FIRST_PULSE_DELAY_SEC, &c, Vec3::Z).is_some());
}

#[test]
fn intervals_stay_between_five_and_six_seconds() {
    let mut s = PulseScheduler::new(7);
    let c = catalog();
    let mut now = 0.0;
    let mut fired = Vec::new();
    while fired.len() < 20 {
        if s.update(now, &c, Vec3::Z).is_some() {
            fired.push(now);
        }
        now += 0.01;
    }
    for pair in fired.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(
            gap >= PULSE_INTERVAL_MIN_SEC - 0.02 && gap <= PULSE_INTERVAL_MAX_SEC + 0.02,
            "gap {gap}"
        );
    }
}

#[test]
fn pulses_only_pick_facing_quakes() {
    let c = catalog();
    for seed in 0..32 {
        let mut s = PulseScheduler::new(seed);
        let ev = s.update(FIRST_PULSE_DELAY_SEC, &c, Vec3::Z).unwrap();
        assert_ne!(ev.quake_index, 2, "seed {seed}");
        assert!(c.get(ev.quake_index).unwrap().pos.dot(Vec3::Z) >= PERTINENT_MIN_DOT);
    }
}

#[test]
fn picks_stay_within_the_best_facing_pool() {
    // twelve facing quakes, nearest-to-camera last so index order differs from rank
    let quakes: Vec<Earthquake> = (0..12).rev().map(|i| quake_at(i as f32 * 5.0, -90.0)).collect();
    let c = QuakeCatalog::from_quakes(quakes);
    let candidates = c.pertinent_candidates(Vec3::Z, PERTINENT_MIN_DOT);
    assert!(candidates.len() > PERTINENT_POOL);
    let pool = &candidates[..PERTINENT_POOL];

    let mut seen = std::collections::HashSet::new();
    for seed in 0..200 {
        let mut s = PulseScheduler::new(seed);
        let ev = s.update(FIRST_PULSE_DELAY_SEC, &c, Vec3::Z).unwrap();
        assert!(pool.contains(&ev.quake_index), "seed {seed} picked {}", ev.quake_index);
        seen.insert(ev.quake_index);
    }
    // random among the pool, not always the single best
    assert!(seen.len() > 1);
}

#[test]
fn falls_back_to_most_pertinent_when_nothing_faces_camera() {
    let c = catalog();
    let mut s = PulseScheduler::new(3);
    // +Y: nothing clears the threshold, quake 1 (lat 10) is highest
    let ev = s.update(FIRST_PULSE_DELAY_SEC, &c, Vec3::Y).unwrap();
    assert_eq!(ev.quake_index, 1);
}

#[test]
fn empty_catalog_never_pulses_but_reschedules() {
    let mut s = PulseScheduler::new(0);
    let empty = QuakeCatalog::default();
    assert_eq!(s.update(FIRST_PULSE_DELAY_SEC, &empty, Vec3::Z), None);
    let next = s.next_at().unwrap();
    assert!(next > FIRST_PULSE_DELAY_SEC);
    assert!(s.active().is_none());
}

#[test]
fn pulse_state_envelope() {
    let p = Pulse::new(4, 10.0);
    assert_eq!(p.state(9.0), None);
    let start = p.state(10.0).unwrap();
    assert_eq!(start.quake_index, 4);
    assert!(start.alpha.abs() < 1e-6);
    assert!(start.ring_radius.abs() < 1e-6);

    let peak = p.state(10.25).unwrap();
    assert!((peak.alpha - 1.0).abs() < 1e-5);

    let late = p.state(10.0 + PULSE_DURATION_SEC - 0.05).unwrap();
    assert!(late.alpha < 0.1);
    assert!(late.ring_radius > 0.9 * PULSE_RING_MAX_RADIUS);
    assert!(late.wave_phase > 0.9);

    assert_eq!(p.state(10.0 + PULSE_DURATION_SEC), None);
}

#[test]
fn active_pulse_expires_and_cancel_stops_scheduling() {
    let c = catalog();
    let mut s = PulseScheduler::new(11);
    s.update(FIRST_PULSE_DELAY_SEC, &c, Vec3::Z).unwrap();
    assert!(s.active_state(FIRST_PULSE_DELAY_SEC + 1.0).is_some());
    assert!(s.active_state(FIRST_PULSE_DELAY_SEC + PULSE_DURATION_SEC).is_none());

    s.cancel();
    assert!(s.active().is_none());
    assert_eq!(s.update(1000.0, &c, Vec3::Z), None);

    s.resume(1000.0);
    let next = s.next_at().unwrap();
    assert!((PULSE_INTERVAL_MIN_SEC..=PULSE_INTERVAL_MAX_SEC).contains(&(next - 1000.0)));
}
