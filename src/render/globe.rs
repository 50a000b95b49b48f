use super::helpers::{Instances, Layer, LayerDesc, LayerUniforms, Shared};
use glam::{Mat4, Vec3};
use globe_core::{Model, ModelSlot};

const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

/// The point-cloud earth: one sprite per globe model vertex.
pub(crate) struct PointGlobe {
    layer: Layer,
    points: Option<Instances>,
    point_size_px: f32,
}

impl PointGlobe {
    pub(crate) fn new(device: &wgpu::Device, shared: &Shared, point_size_px: f32) -> Self {
        let layer = Layer::new(
            device,
            shared,
            LayerDesc {
                label: "globe",
                source: super::GLOBE_WGSL,
                vs_entry: "vs_globe",
                fs_entry: "fs_sprite",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (ModelSlot::Globe.stride() * 4) as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &ATTRS,
                }],
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );
        Self {
            layer,
            points: None,
            point_size_px,
        }
    }

    pub(crate) fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    /// Globe vertices become instances; its index list is not needed.
    pub(crate) fn set_model(&mut self, device: &wgpu::Device, model: &Model) {
        match bytemuck::try_cast_slice::<f32, [f32; 4]>(&model.vertices) {
            Ok(points) => self.points = Instances::new(device, "globe_points", points),
            Err(e) => log::error!("globe model: {e}"),
        }
    }

    pub(crate) fn prepare(
        &self,
        queue: &wgpu::Queue,
        model: Mat4,
        alpha: f32,
        scatter: f32,
        eye: Vec3,
    ) {
        let params = [alpha, self.point_size_px, scatter, 0.0];
        let extra = eye.extend(0.0).to_array();
        self.layer
            .write(queue, &LayerUniforms::new(model, params, extra));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>, shared: &Shared) {
        let Some(points) = &self.points else { return };
        if self.layer.bind(pass, shared) {
            points.draw(pass);
        }
    }
}
