use super::helpers::{Layer, LayerDesc, LayerUniforms, Mesh, Shared};
use crate::constants::{NEBULA_ALPHA_MAX, NEBULA_DRIFT_PER_SEC};
use glam::Mat4;
use globe_core::{Model, ModelSlot};

pub(crate) const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

/// Stride of the xyz+uv meshes (nebula and ring).
pub(crate) const MESH_STRIDE: u64 = (ModelSlot::Ring.stride() * 4) as u64;

pub(crate) struct Nebula {
    layer: Layer,
    mesh: Option<Mesh>,
}

impl Nebula {
    pub(crate) fn new(device: &wgpu::Device, shared: &Shared) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "nebula",
                source: super::NEBULA_WGSL,
                vs_entry: "vs_nebula",
                fs_entry: "fs_nebula",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: MESH_STRIDE,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                }],
                blend: super::helpers::ADDITIVE,
            },
        );
        Self { layer, mesh: None }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub(crate) fn set_model(&mut self, device: &wgpu::Device, model: &Model) {
        self.mesh = Some(Mesh::new(device, "nebula_mesh", model));
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, model: Mat4, alpha: f32) {
        let params = [alpha * NEBULA_ALPHA_MAX, NEBULA_DRIFT_PER_SEC, 0.0, 0.0];
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
