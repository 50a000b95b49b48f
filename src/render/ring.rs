use super::helpers::{Layer, LayerDesc, LayerUniforms, Mesh, Shared, ADDITIVE};
use super::nebula::{MESH_ATTRS, MESH_STRIDE};
use crate::constants::RING_ALPHA_MAX;
use glam::Mat4;
use globe_core::Model;

/// Flat halo circling the globe.
pub(crate) struct Ring {
    layer: Layer,
    mesh: Option<Mesh>,
}

impl Ring {
    pub(crate) fn new(device: &wgpu::Device, shared: &Shared) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "ring",
                source: super::RING_WGSL,
                vs_entry: "vs_ring",
                fs_entry: "fs_ring",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: MESH_STRIDE,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                }],
                blend: ADDITIVE,
            },
        );
        Self { layer, mesh: None }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub(crate) fn set_model(&mut self, device: &wgpu::Device, model: &Model) {
        self.mesh = Some(Mesh::new(device, "ring_mesh", model));
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, model: Mat4, alpha: f32) {
        let params = [alpha * RING_ALPHA_MAX, 0.0, 0.0, 0.0];
        self.layer
            .write(queue, &LayerUniforms::new(model, params, [0.0; 4]));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        let Some(mesh) = &self.mesh else { return };
        if self.layer.bind(pass, shared) {
            mesh.draw(pass);
        }
    }
}
