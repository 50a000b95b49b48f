use super::helpers::{Layer, LayerDesc, LayerUniforms, Shared, ADDITIVE, QUAD_VERTICES};
use glam::{Mat4, Vec3};
use globe_core::{PulseState, BIG_QUAKE_SIZE_PX, QUAKE_LIFT};

/// Expanding ring over the quake picked by the current pulse.
pub(crate) struct BigQuake {
    layer: Layer,
    size_scale: f32,
    visible: bool,
}

impl BigQuake {
    pub(crate) fn new(device: &wgpu::Device, shared: &Shared, size_scale: f32) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "big_quake",
                source: super::BIG_QUAKE_WGSL,
                vs_entry: "vs_big_quake",
                fs_entry: "fs_big_quake",
                buffers: &[],
                blend: ADDITIVE,
            },
        );
        Self {
            layer,
            size_scale,
            visible: false,
        }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    /// `pulse` carries the envelope and the quake's globe-space position.
    pub(crate) fn prepare(&mut self, queue: &wgpu::Queue, model: Mat4, pulse: Option<(PulseState, Vec3)>) {
        let Some((state, pos)) = pulse else {
            self.visible = false;
            return;
        };
        self.visible = true;
        let params = [
            state.alpha,
            state.ring_radius,
            state.wave_phase,
            BIG_QUAKE_SIZE_PX * self.size_scale,
        ];
        let extra = (pos * QUAKE_LIFT).extend(0.0).to_array();
        self.layer
            .write(queue, &LayerUniforms::new(model, params, extra));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        if self.visible && self.layer.bind(pass, shared) {
            pass.draw(0..QUAD_VERTICES, 0..1);
        }
    }
}
