//! Async asset loading. Futures run on `spawn_local` and park their results
//! in [`PendingAssets`] for the frame loop to upload.

use gloo_net::http::Request;
use globe_core::{decode_png, DecodedTexture, DeviceClass, ModelLibrary, TextureSlot};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Loaded but not yet on the GPU.
#[derive(Default)]
pub struct PendingAssets {
    pub models: Option<Rc<ModelLibrary>>,
    pub textures: Vec<(TextureSlot, DecodedTexture)>,
}

pub type SharedPending = Rc<RefCell<PendingAssets>>;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        anyhow::bail!("GET {url}: HTTP {}", resp.status());
    }
    Ok(resp.binary().await?)
}

pub async fn fetch_model_library(device: DeviceClass) -> anyhow::Result<ModelLibrary> {
    let url = device.blob_url();
    let started = Instant::now();
    let bytes = fetch_bytes(url).await?;
    let library = ModelLibrary::from_blob(&bytes)?;
    log::info!(
        "[assets] {} ({} bytes) in {:.0} ms: globe={} ring={} nebula={} floats",
        url,
        bytes.len(),
        started.elapsed().as_secs_f64() * 1000.0,
        library.globe.vertices.len(),
        library.ring.vertices.len(),
        library.nebula.vertices.len(),
    );
    Ok(library)
}

pub async fn fetch_texture(slot: TextureSlot) -> anyhow::Result<DecodedTexture> {
    let url = slot
        .url()
        .ok_or_else(|| anyhow::anyhow!("{} is embedded, not fetched", slot.label()))?;
    let bytes = fetch_bytes(url).await?;
    Ok(decode_png(&bytes)?)
}

/// Start one fetch per sprite texture; each lands in `pending` on success.
pub fn spawn_texture_loads(pending: &SharedPending) {
    for slot in TextureSlot::ALL.into_iter().filter(|s| s.url().is_some()) {
        let pending = pending.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_texture(slot).await {
                Ok(image) => pending.borrow_mut().textures.push((slot, image)),
                Err(e) => log::error!("[assets] texture {}: {:#}", slot.label(), e),
            }
        });
    }
}
