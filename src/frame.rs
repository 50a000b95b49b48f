use crate::assets::SharedPending;
use crate::constants::LABEL_HIDE_ALPHA;
use crate::dom;
use crate::overlay;
use crate::render::{self, FrameInputs};
use globe_core::{IntroTimeline, PulseScheduler, QuakeCatalog, SceneClock, SceneConfig, SceneTransforms};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: SceneConfig,
    pub catalog: Rc<QuakeCatalog>,
    pub intro: IntroTimeline,
    pub pulses: PulseScheduler,
    pub clock: SceneClock,
    pub pending: SharedPending,
    pub gpu: Option<render::GpuState<'a>>,
    /// Quake index currently named in `#quake-label`.
    pub labelled: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self, now_ms: f64) {
        let (t, _dt) = self.clock.tick(now_ms);
        let intro = self.intro.state(t);
        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        let transforms = SceneTransforms::at(t, &self.scene, &intro, aspect);

        let toward = transforms.toward_camera_in_globe_space();
        if let Some(ev) = self.pulses.update(t, &self.catalog, toward) {
            if let Some(q) = self.catalog.get(ev.quake_index) {
                log::info!("[pulse] #{} M{:.1} {}", ev.quake_index, q.magnitude, q.place);
                overlay::show_label(&self.document, &q.label());
                self.labelled = Some(ev.quake_index);
            }
        }
        let pulse = self.pulses.active_state(t);
        self.update_label(pulse.as_ref());

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        {
            let mut pending = self.pending.borrow_mut();
            if let Some(library) = pending.models.take() {
                gpu.upload_models(&library);
            }
            for (slot, image) in pending.textures.drain(..) {
                gpu.upload_texture(slot, &image);
            }
        }

        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let inputs = FrameInputs {
            time: t,
            device_pixel_ratio: dom::device_pixel_ratio(),
            transforms: &transforms,
            intro: &intro,
            pulse: pulse.and_then(|p| self.catalog.get(p.quake_index).map(|q| (p, q.pos))),
        };
        match gpu.render(&inputs) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn update_label(&mut self, pulse: Option<&globe_core::PulseState>) {
        if self.labelled.is_none() {
            return;
        }
        // fading out: past the envelope peak and nearly transparent
        let fading = pulse.map_or(true, |p| p.wave_phase > 0.5 && p.alpha < LABEL_HIDE_ALPHA);
        if fading {
            overlay::hide_label(&self.document);
            self.labelled = None;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneConfig,
    catalog: &QuakeCatalog,
    bokeh_seed: u64,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, catalog, bokeh_seed).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    type Tick = Closure<dyn FnMut(f64)>;
    let tick: Rc<RefCell<Option<Tick>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
