//! Easing curves, numeric tweens and a keyed timeline.
//!
//! Only what the page animates is here: scalar fades, zooms and pulse
//! envelopes. All times are in seconds relative to the owner's start time.

use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoOut,
    BackOut,
}

impl Ease {
    pub const ALL: [Ease; 12] = [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::ExpoOut,
        Ease::BackOut,
    ];

    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => t * (2.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Ease::SineOut => (t * FRAC_PI_2).sin(),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Ease::BackOut => {
                const C1: f32 = 1.701_58;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

/// A scalar interpolation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration,
            ease,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }

    /// Progress in `[0, 1]` at `elapsed`.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.delay;
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed: f32) -> f32 {
        let k = self.ease.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * k
    }
}

/// Keyed tracks of tweens. On each key, the latest tween whose delay has
/// started drives the value, so tweens on one key play back in sequence.
#[derive(Clone, Debug)]
pub struct Timeline<K> {
    tracks: SmallVec<[(K, Tween); 8]>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            tracks: SmallVec::new(),
        }
    }
}

impl<K: Copy + Eq> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, tween: Tween) -> &mut Self {
        self.tracks.push((key, tween));
        self
    }

    /// Value of `key` at `elapsed`, or `None` if nothing animates it.
    ///
    /// Among started tweens the greatest delay wins, ties going to the one
    /// added last. Before any has started the earliest-delayed tween holds
    /// its `from` value.
    pub fn value(&self, key: K, elapsed: f32) -> Option<f32> {
        let mut started: Option<&Tween> = None;
        let mut earliest: Option<&Tween> = None;
        for (_, t) in self.tracks.iter().filter(|(k, _)| *k == key) {
            if earliest.map_or(true, |e| t.delay < e.delay) {
                earliest = Some(t);
            }
            if elapsed >= t.delay && started.map_or(true, |s| t.delay >= s.delay) {
                started = Some(t);
            }
        }
        started.or(earliest).map(|t| t.value_at(elapsed))
    }

    pub fn value_or(&self, key: K, elapsed: f32, fallback: f32) -> f32 {
        self.value(key, elapsed).unwrap_or(fallback)
    }

    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(|(_, t)| t.end()).fold(0.0, f32::max)
    }

    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }
}
