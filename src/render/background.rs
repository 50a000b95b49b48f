use super::helpers::{Layer, LayerDesc, LayerUniforms, Mesh, Shared};
use globe_core::{Model, ModelSlot};

const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

/// Full-screen gradient behind everything else.
pub(crate) struct Background {
    layer: Layer,
    mesh: Mesh,
}

impl Background {
    pub(crate) fn new(device: &wgpu::Device, shared: &Shared) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "background",
                source: super::BACKGROUND_WGSL,
                vs_entry: "vs_background",
                fs_entry: "fs_background",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (ModelSlot::Background.stride() * 4) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &ATTRS,
                }],
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );
        let mesh = Mesh::new(device, "background_mesh", &Model::background_quad());
        Self { layer, mesh }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    pub(crate) fn prepare(&self, queue: &wgpu::Queue, alpha: f32) {
        let u = LayerUniforms::new(glam::Mat4::IDENTITY, [alpha, 0.0, 0.0, 0.0], [0.0; 4]);
        self.layer.write(queue, &u);
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        if self.layer.bind(pass, shared) {
            self.mesh.draw(pass);
        }
    }
}
