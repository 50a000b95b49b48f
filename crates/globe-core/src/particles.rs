//! Procedural bokeh particles and GPU instance layouts.

use crate::constants::QUAKE_LIFT;
use crate::quake::Earthquake;
use bytemuck::{Pod, Zeroable};
use rand::prelude::*;
use std::f32::consts::TAU;

pub const BOKEH_SHELL_MIN: f32 = 1.8;
pub const BOKEH_SHELL_MAX: f32 = 4.5;

/// One bokeh sprite. The shader drifts it around `pos` using `phase`/`speed`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct BokehInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub phase: f32,
    pub speed: f32,
    pub tint: f32,
    pub _pad: f32,
}

/// One earthquake marker.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuakeInstance {
    pub pos: [f32; 3],
    pub magnitude: f32,
}

/// Scatter `count` particles in a spherical shell around the globe.
pub fn bokeh_particles(count: usize, seed: u64) -> Vec<BokehInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // uniform direction: z uniform in [-1, 1], azimuth uniform
            let z: f32 = rng.gen_range(-1.0..=1.0);
            let azimuth: f32 = rng.gen_range(0.0..TAU);
            let r_xy = (1.0 - z * z).max(0.0).sqrt();
            let radius = rng.gen_range(BOKEH_SHELL_MIN..=BOKEH_SHELL_MAX);
            BokehInstance {
                pos: [
                    r_xy * azimuth.cos() * radius,
                    r_xy * azimuth.sin() * radius,
                    z * radius,
                ],
                size: rng.gen_range(0.35..=1.0),
                phase: rng.gen_range(0.0..TAU),
                speed: rng.gen_range(0.05..=0.2),
                tint: rng.gen(),
                _pad: 0.0,
            }
        })
        .collect()
}

pub fn quake_instances(quakes: &[Earthquake]) -> Vec<QuakeInstance> {
    quakes
        .iter()
        .map(|q| QuakeInstance {
            pos: (q.pos * QUAKE_LIFT).to_array(),
            magnitude: q.magnitude,
        })
        .collect()
}
