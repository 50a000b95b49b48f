#![cfg(target_arch = "wasm32")]
use globe_core::{IntroTimeline, ModelLibrary, PulseScheduler, QuakeCatalog, SceneClock, SceneConfig, Signal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod frame;
mod overlay;
mod render;

use assets::{PendingAssets, SharedPending};
use constants::CANVAS_ID;

/// Load-completion notifications shared by the async loaders.
struct Signals {
    catalog_loaded: RefCell<Signal<Rc<QuakeCatalog>>>,
    models_loaded: RefCell<Signal<Rc<ModelLibrary>>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("quake-globe starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);

    let device = dom::detect_device_class();
    let scene = SceneConfig::for_device(device);
    log::info!("[init] {:?} {}x{}", device, canvas.width(), canvas.height());

    let pending: SharedPending = Rc::new(RefCell::new(PendingAssets::default()));
    let signals = Rc::new(Signals {
        catalog_loaded: RefCell::new(Signal::new()),
        models_loaded: RefCell::new(Signal::new()),
    });
    signals.catalog_loaded.borrow_mut().add_once(|catalog: &Rc<QuakeCatalog>| {
        match catalog.strongest() {
            Some(q) => log::info!("[catalog] {} quakes, strongest M{:.1} {}", catalog.len(), q.magnitude, q.place),
            None => log::info!("[catalog] empty"),
        }
    });
    {
        let pending = pending.clone();
        signals
            .models_loaded
            .borrow_mut()
            .add_once(move |library: &Rc<ModelLibrary>| {
                pending.borrow_mut().models = Some(library.clone());
            });
    }

    let catalog = Rc::new(QuakeCatalog::embedded()?);
    signals.catalog_loaded.borrow_mut().dispatch(&catalog);

    {
        let signals = signals.clone();
        spawn_local(async move {
            match assets::fetch_model_library(device).await {
                Ok(library) => signals.models_loaded.borrow_mut().dispatch(&Rc::new(library)),
                Err(e) => log::error!("[assets] models: {:#}", e),
            }
        });
    }
    assets::spawn_texture_loads(&pending);

    let gpu = frame::init_gpu(&canvas, &scene, &catalog, random_seed()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        document,
        scene,
        catalog,
        intro: IntroTimeline::default(),
        pulses: PulseScheduler::new(random_seed()),
        clock: SceneClock::default(),
        pending,
        gpu,
        labelled: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
