//! Periodic highlight of a randomly chosen quake that faces the camera.

use crate::anim::{Ease, Timeline, Tween};
use crate::constants::*;
use crate::quake::QuakeCatalog;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PulseKey {
    RingRadius,
    Alpha,
    Wave,
}

/// Emitted when a new pulse starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseEvent {
    pub quake_index: usize,
}

/// Envelope values for the highlight layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseState {
    pub quake_index: usize,
    pub ring_radius: f32,
    pub alpha: f32,
    pub wave_phase: f32,
}

#[derive(Clone, Debug)]
pub struct Pulse {
    pub quake_index: usize,
    pub started_at: f32,
    timeline: Timeline<PulseKey>,
}

impl Pulse {
    pub fn new(quake_index: usize, started_at: f32) -> Self {
        let mut timeline = Timeline::new();
        timeline
            .add(
                PulseKey::RingRadius,
                Tween::new(0.0, PULSE_RING_MAX_RADIUS, PULSE_DURATION_SEC, Ease::ExpoOut),
            )
            .add(PulseKey::Alpha, Tween::new(0.0, 1.0, 0.25, Ease::QuadOut))
            .add(
                PulseKey::Alpha,
                Tween::new(1.0, 0.0, PULSE_DURATION_SEC - 0.25, Ease::SineIn).delayed(0.25),
            )
            .add(
                PulseKey::Wave,
                Tween::new(0.0, 1.0, PULSE_DURATION_SEC, Ease::Linear),
            );
        Self {
            quake_index,
            started_at,
            timeline,
        }
    }

    /// `None` once the pulse has run its course.
    pub fn state(&self, now: f32) -> Option<PulseState> {
        let t = now - self.started_at;
        if t < 0.0 || self.timeline.is_complete(t) {
            return None;
        }
        Some(PulseState {
            quake_index: self.quake_index,
            ring_radius: self.timeline.value_or(PulseKey::RingRadius, t, 0.0),
            alpha: self.timeline.value_or(PulseKey::Alpha, t, 0.0),
            wave_phase: self.timeline.value_or(PulseKey::Wave, t, 0.0),
        })
    }
}

/// Fires a pulse every 5-6 seconds (randomized) against the catalog.
pub struct PulseScheduler {
    rng: StdRng,
    next_at: Option<f32>,
    active: Option<Pulse>,
}

impl PulseScheduler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_at: Some(FIRST_PULSE_DELAY_SEC),
            active: None,
        }
    }

    pub fn next_at(&self) -> Option<f32> {
        self.next_at
    }

    pub fn active(&self) -> Option<&Pulse> {
        self.active.as_ref()
    }

    pub fn active_state(&self, now: f32) -> Option<PulseState> {
        self.active.as_ref().and_then(|p| p.state(now))
    }

    /// Drop the running pulse and stop scheduling new ones.
    pub fn cancel(&mut self) {
        self.next_at = None;
        self.active = None;
    }

    /// Re-arm after [`cancel`](Self::cancel), counting from `now`.
    pub fn resume(&mut self, now: f32) {
        if self.next_at.is_none() {
            self.next_at = Some(now + self.interval());
        }
    }

    fn interval(&mut self) -> f32 {
        self.rng
            .gen_range(PULSE_INTERVAL_MIN_SEC..=PULSE_INTERVAL_MAX_SEC)
    }

    pub fn update(
        &mut self,
        now: f32,
        catalog: &QuakeCatalog,
        toward_camera: Vec3,
    ) -> Option<PulseEvent> {
        if self
            .active
            .as_ref()
            .is_some_and(|p| now - p.started_at >= PULSE_DURATION_SEC)
        {
            self.active = None;
        }
        let due = self.next_at?;
        if now < due {
            return None;
        }
        self.next_at = Some(now + self.interval());

        let quake_index = self.pick(catalog, toward_camera)?;
        self.active = Some(Pulse::new(quake_index, now));
        Some(PulseEvent { quake_index })
    }

    fn pick(&mut self, catalog: &QuakeCatalog, toward_camera: Vec3) -> Option<usize> {
        let candidates = catalog.pertinent_candidates(toward_camera, PERTINENT_MIN_DOT);
        let pool = &candidates[..candidates.len().min(PERTINENT_POOL)];
        match pool.choose(&mut self.rng) {
            Some(&i) => Some(i),
            None => catalog.most_pertinent(toward_camera),
        }
    }
}
