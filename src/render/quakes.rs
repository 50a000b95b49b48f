use super::helpers::{Instances, Layer, LayerDesc, LayerUniforms, Shared, ADDITIVE};
use crate::constants::{QUAKE_RIPPLE_AMOUNT, QUAKE_RIPPLE_SPEED};
use glam::{Mat4, Vec3};
use globe_core::{quake_instances, QuakeCatalog, QuakeInstance, QUAKE_BASE_SIZE_PX, QUAKE_SIZE_PER_MAG_PX};

const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

/// Magnitude-sized markers for every catalog record.
pub(crate) struct QuakePoints {
    layer: Layer,
    instances: Option<Instances>,
    size_scale: f32,
}

impl QuakePoints {
    pub(crate) fn new(
        device: &wgpu::Device,
        shared: &Shared,
        catalog: &QuakeCatalog,
        size_scale: f32,
    ) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "quakes",
                source: super::QUAKES_WGSL,
                vs_entry: "vs_quakes",
                fs_entry: "fs_sprite",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<QuakeInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &ATTRS,
                }],
                blend: ADDITIVE,
            },
        );
        let instances = Instances::new(
            device,
            "quake_instances",
            &quake_instances(catalog.as_slice()),
        );
        Self {
            layer,
            instances,
            size_scale,
        }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, model: Mat4, alpha: f32, eye: Vec3) {
        let params = [
            alpha,
            QUAKE_BASE_SIZE_PX * self.size_scale,
            QUAKE_SIZE_PER_MAG_PX * self.size_scale,
            QUAKE_RIPPLE_SPEED,
        ];
        let extra = eye.extend(QUAKE_RIPPLE_AMOUNT).to_array();
        self.layer
            .write(queue, &LayerUniforms::new(model, params, extra));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        let Some(instances) = &self.instances else { return };
        if self.layer.bind(pass, shared) {
            instances.draw(pass);
        }
    }
}
