use base64::Engine as _;
use thiserror::Error;

/// 4x64 RGBA background gradient.
pub static BACKGROUND_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAQAAABACAYAAAA9ONYEAAAAvUlEQVR42q3My07DQBBE0dpAnMSPmfEYbCDiFSDh//+v6OWVzAIhL06pdRetm91i0r/CbNJtM5s2Cbvm3rRJaGJIzT4OWId9DP0hHA6zaR2Ox8Wktn0wRXgyqetOJvX9s0lDejUp5XeTcvkwqYxfJo31YlKtV5Pq9G3SFEMRrqb4cTFF+DSpjmeTxvJmUskvJpV0MikPjyalfjFFmE1K3Z1JQzeZNLTVFGE0RSim30I2rUNqk2mTkNvBtEX4Ad7NMgDWexJ3AAAAAElFTkSuQmCC";

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("invalid base64 image: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has zero size")]
    Empty,
}

/// Sprite textures used by the drawables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Point,
    Nebula,
    Bokeh,
    Ring,
    Quake,
    Background,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::Point,
        TextureSlot::Nebula,
        TextureSlot::Bokeh,
        TextureSlot::Ring,
        TextureSlot::Quake,
        TextureSlot::Background,
    ];

    /// Where to fetch the sprite; `None` for the embedded background.
    pub fn url(self) -> Option<&'static str> {
        match self {
            TextureSlot::Point => Some("/img/point.png"),
            TextureSlot::Nebula => Some("/img/nebula.png"),
            TextureSlot::Bokeh => Some("/img/bokeh.png"),
            TextureSlot::Ring => Some("/img/ring.png"),
            TextureSlot::Quake => Some("/img/quake.png"),
            TextureSlot::Background => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextureSlot::Point => "point_tex",
            TextureSlot::Nebula => "nebula_tex",
            TextureSlot::Bokeh => "bokeh_tex",
            TextureSlot::Ring => "ring_tex",
            TextureSlot::Quake => "quake_tex",
            TextureSlot::Background => "background_tex",
        }
    }
}

/// Tightly packed RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct DecodedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn decode_png(bytes: &[u8]) -> Result<DecodedTexture, TextureError> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::Empty);
    }
    Ok(DecodedTexture {
        width,
        height,
        rgba: img.into_raw(),
    })
}

pub fn decode_base64_png(encoded: &str) -> Result<DecodedTexture, TextureError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    decode_png(&bytes)
}

pub fn decode_background() -> Result<DecodedTexture, TextureError> {
    decode_base64_png(BACKGROUND_PNG_BASE64)
}
