use crate::constants::CLEAR_COLOR;
use glam::Vec3;
use globe_core::{
    decode_background, DecodedTexture, IntroState, ModelLibrary, PulseState, QuakeCatalog,
    SceneConfig, SceneTransforms, TextureSlot,
};
use web_sys as web;

mod background;
mod big_quake;
mod bokeh;
mod globe;
mod helpers;
mod nebula;
mod quakes;
mod ring;

use background::Background;
use big_quake::BigQuake;
use bokeh::Bokeh;
use globe::PointGlobe;
use helpers::{Globals, Shared};
use nebula::Nebula;
use quakes::QuakePoints;
use ring::Ring;

macro_rules! layer_shader {
    ($file:literal) => {
        concat!(
            include_str!("../../shaders/common.wgsl"),
            "\n",
            include_str!(concat!("../../shaders/", $file))
        )
    };
}

pub(crate) static BACKGROUND_WGSL: &str = layer_shader!("background.wgsl");
pub(crate) static NEBULA_WGSL: &str = layer_shader!("nebula.wgsl");
pub(crate) static BOKEH_WGSL: &str = layer_shader!("bokeh.wgsl");
pub(crate) static GLOBE_WGSL: &str = layer_shader!("globe.wgsl");
pub(crate) static RING_WGSL: &str = layer_shader!("ring.wgsl");
pub(crate) static QUAKES_WGSL: &str = layer_shader!("quakes.wgsl");
pub(crate) static BIG_QUAKE_WGSL: &str = layer_shader!("big_quake.wgsl");

/// Everything one frame draw needs from the scene side.
pub struct FrameInputs<'a> {
    pub time: f32,
    pub device_pixel_ratio: f32,
    pub transforms: &'a SceneTransforms,
    pub intro: &'a IntroState,
    /// Active pulse envelope and the pulsing quake's globe-space position.
    pub pulse: Option<(PulseState, Vec3)>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    shared: Shared,

    background: Background,
    nebula: Nebula,
    bokeh: Bokeh,
    globe: PointGlobe,
    ring: Ring,
    quakes: QuakePoints,
    big_quake: BigQuake,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &SceneConfig,
        catalog: &QuakeCatalog,
        bokeh_seed: u64,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shared = Shared::new(&device, format);
        let mut background = Background::new(&device, &shared);
        match decode_background() {
            Ok(image) => {
                let view = helpers::upload_texture(&device, &queue, TextureSlot::Background.label(), &image);
                background
                    .layer_mut()
                    .bind_texture(&device, &shared, &view, &shared.clamp_sampler);
            }
            Err(e) => log::error!("background texture: {e}"),
        }
        let nebula = Nebula::new(&device, &shared);
        let bokeh = Bokeh::new(
            &device,
            &shared,
            scene.bokeh_count,
            scene.bokeh_size_px,
            bokeh_seed,
        );
        let globe = PointGlobe::new(&device, &shared, scene.globe_point_size_px);
        let ring = Ring::new(&device, &shared);
        let quakes = QuakePoints::new(&device, &shared, catalog, scene.quake_size_scale);
        let big_quake = BigQuake::new(&device, &shared, scene.quake_size_scale);

        let [r, g, b, a] = CLEAR_COLOR;
        log::info!("[gpu] {:?} surface {}x{}", format, width, height);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            shared,
            background,
            nebula,
            bokeh,
            globe,
            ring,
            quakes,
            big_quake,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn upload_models(&mut self, library: &ModelLibrary) {
        self.globe.set_model(&self.device, &library.globe);
        self.ring.set_model(&self.device, &library.ring);
        self.nebula.set_model(&self.device, &library.nebula);
    }

    pub fn upload_texture(&mut self, slot: TextureSlot, image: &DecodedTexture) {
        let view = helpers::upload_texture(&self.device, &self.queue, slot.label(), image);
        let (device, shared) = (&self.device, &self.shared);
        let clamp = &shared.clamp_sampler;
        match slot {
            TextureSlot::Point => self.globe.layer_mut().bind_texture(device, shared, &view, clamp),
            TextureSlot::Nebula => {
                self.nebula
                    .layer_mut()
                    .bind_texture(device, shared, &view, &shared.repeat_sampler)
            }
            TextureSlot::Bokeh => self.bokeh.layer_mut().bind_texture(device, shared, &view, clamp),
            TextureSlot::Ring => self.ring.layer_mut().bind_texture(device, shared, &view, clamp),
            TextureSlot::Quake => {
                self.quakes.layer_mut().bind_texture(device, shared, &view, clamp);
                self.big_quake
                    .layer_mut()
                    .bind_texture(device, shared, &view, clamp);
            }
            TextureSlot::Background => {
                self.background
                    .layer_mut()
                    .bind_texture(device, shared, &view, clamp)
            }
        }
        log::info!("[gpu] texture {} {}x{}", slot.label(), image.width, image.height);
    }

    pub fn render(&mut self, inputs: &FrameInputs<'_>) -> Result<(), wgpu::SurfaceError> {
        let t = inputs.transforms;
        let intro = inputs.intro;
        let eye = t.camera.eye;

        let globals = Globals {
            view_proj: t.camera.view_proj().to_cols_array_2d(),
            frame: [
                self.width as f32,
                self.height as f32,
                inputs.time,
                inputs.device_pixel_ratio,
            ],
        };
        self.queue
            .write_buffer(&self.shared.globals_buffer, 0, bytemuck::bytes_of(&globals));

        self.background.prepare(&self.queue, intro.background_alpha);
        self.nebula.prepare(&self.queue, t.nebula, intro.nebula_alpha);
        self.bokeh.prepare(&self.queue, t.bokeh, intro.nebula_alpha);
        self.globe
            .prepare(&self.queue, t.globe, intro.globe_alpha, intro.scatter, eye);
        self.ring.prepare(&self.queue, t.ring, intro.ring_alpha);
        self.quakes.prepare(&self.queue, t.globe, intro.globe_alpha, eye);
        self.big_quake.prepare(&self.queue, t.globe, inputs.pulse);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // back to front
            self.background.draw(&mut pass, &self.shared);
            self.nebula.draw(&mut pass, &self.shared);
            self.bokeh.draw(&mut pass, &self.shared);
            self.globe.draw(&mut pass, &self.shared);
            self.ring.draw(&mut pass, &self.shared);
            self.quakes.draw(&mut pass, &self.shared);
            self.big_quake.draw(&mut pass, &self.shared);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
