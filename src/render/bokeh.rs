use super::helpers::{Instances, Layer, LayerDesc, LayerUniforms, Shared, ADDITIVE};
use glam::Mat4;
use globe_core::{bokeh_particles, BokehInstance};

const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32,
    2 => Float32,
    3 => Float32,
    4 => Float32
];

/// Out-of-focus dust drifting around the globe.
pub(crate) struct Bokeh {
    layer: Layer,
    instances: Option<Instances>,
    size_px: f32,
}

impl Bokeh {
    pub(crate) fn new(
        device: &wgpu::Device,
        shared: &Shared,
        count: usize,
        size_px: f32,
        seed: u64,
    ) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "bokeh",
                source: super::BOKEH_WGSL,
                vs_entry: "vs_bokeh",
                fs_entry: "fs_sprite",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<BokehInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &ATTRS,
                }],
                blend: ADDITIVE,
            },
        );
        let particles = bokeh_particles(count, seed);
        Self {
            layer,
            instances: Instances::new(device, "bokeh_instances", &particles),
            size_px,
        }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, model: Mat4, alpha: f32) {
        let params = [alpha, self.size_px, 0.0, 0.0];
        self.layer
            .write(queue, &LayerUniforms::new(model, params, [0.0; 4]));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        let Some(instances) = &self.instances else { return };
        if self.layer.bind(pass, shared) {
            instances.draw(pass);
        }
    }
}
