//! Static geometry and the `combined.blob` container it ships in.
//!
//! Blob layout, little-endian:
//!
//! ```text
//! u32 model_count
//! u32 record_size        x model_count   (bytes, header included)
//! per model record:
//!     u32 vertex_count   (number of f32 values, not vertices)
//!     u32 index_count
//!     f32 vertices       x vertex_count
//!     u16 indices        x index_count
//!     padding up to record_size
//! ```

use crate::constants::{MOBILE_MAX_WIDTH_PX, MOBILE_UA_MARKER};
use thiserror::Error;

const WORD: usize = 4;
const RECORD_HEADER: usize = 2 * WORD;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelBlobError {
    #[error("blob truncated: needed {needed} bytes at offset {offset}, have {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },
    #[error("model {model}: payload of {payload} bytes does not fit its {record} byte record")]
    RecordOverflow {
        model: usize,
        payload: usize,
        record: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelLibraryError {
    #[error("blob holds {found} models, expected at least {expected}")]
    MissingModel { found: usize, expected: usize },
    #[error("{slot:?}: {len} floats is not a multiple of the {stride}-float vertex")]
    BadStride {
        slot: ModelSlot,
        len: usize,
        stride: usize,
    },
    #[error("{slot:?}: index {index} out of range for {vertices} vertices")]
    IndexOutOfRange {
        slot: ModelSlot,
        index: u16,
        vertices: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelLoadError {
    #[error(transparent)]
    Blob(#[from] ModelBlobError),
    #[error(transparent)]
    Library(#[from] ModelLibraryError),
}

/// A vertex/index array pair for one piece of static geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl Model {
    pub fn new(vertices: Vec<f32>, indices: Vec<u16>) -> Self {
        Self { vertices, indices }
    }

    /// Full-screen quad in clip space: `x, y, u, v` per vertex.
    pub fn background_quad() -> Self {
        Self {
            vertices: vec![
                -1.0, -1.0, 0.0, 1.0, //
                1.0, -1.0, 1.0, 1.0, //
                1.0, 1.0, 1.0, 0.0, //
                -1.0, 1.0, 0.0, 0.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    pub fn vertex_count(&self, stride: usize) -> usize {
        self.vertices.len() / stride.max(1)
    }

    /// Size in bytes of this model's record in a blob, padded to 4 bytes.
    pub fn record_size(&self) -> usize {
        let payload = RECORD_HEADER + self.vertices.len() * WORD + self.indices.len() * 2;
        payload.next_multiple_of(WORD)
    }
}

/// Named geometry slots, in the order they appear in the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    Globe,
    Ring,
    Nebula,
    Background,
}

impl ModelSlot {
    pub const BLOB_ORDER: [ModelSlot; 3] = [ModelSlot::Globe, ModelSlot::Ring, ModelSlot::Nebula];

    /// Floats per vertex.
    pub const fn stride(self) -> usize {
        match self {
            // xyz + scatter seed
            ModelSlot::Globe => 4,
            // xyz + uv
            ModelSlot::Ring | ModelSlot::Nebula => 5,
            // xy + uv
            ModelSlot::Background => 4,
        }
    }
}

/// Which blob variant to download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Narrow viewports and mobile user agents get the light assets.
    pub fn from_viewport(width_css_px: f64, user_agent: &str) -> Self {
        if width_css_px <= MOBILE_MAX_WIDTH_PX || user_agent.contains(MOBILE_UA_MARKER) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn blob_url(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "/bin/mobile/combined.blob",
            DeviceClass::Desktop => "/bin/desktop/combined.blob",
        }
    }
}

/// The downloaded models, sliced out by name and validated.
#[derive(Clone, Debug)]
pub struct ModelLibrary {
    pub globe: Model,
    pub ring: Model,
    pub nebula: Model,
}

impl ModelLibrary {
    pub fn from_blob(bytes: &[u8]) -> Result<Self, ModelLoadError> {
        let models = parse_model_blob(bytes)?;
        Ok(Self::from_models(models)?)
    }

    pub fn from_models(models: Vec<Model>) -> Result<Self, ModelLibraryError> {
        let expected = ModelSlot::BLOB_ORDER.len();
        if models.len() < expected {
            return Err(ModelLibraryError::MissingModel {
                found: models.len(),
                expected,
            });
        }
        let mut it = models.into_iter();
        let mut next = |slot: ModelSlot| -> Result<Model, ModelLibraryError> {
            let model = it.next().unwrap_or_default();
            validate(slot, &model)?;
            Ok(model)
        };
        let globe = next(ModelSlot::Globe)?;
        let ring = next(ModelSlot::Ring)?;
        let nebula = next(ModelSlot::Nebula)?;
        Ok(Self {
            globe,
            ring,
            nebula,
        })
    }

    pub fn get(&self, slot: ModelSlot) -> Option<&Model> {
        match slot {
            ModelSlot::Globe => Some(&self.globe),
            ModelSlot::Ring => Some(&self.ring),
            ModelSlot::Nebula => Some(&self.nebula),
            ModelSlot::Background => None,
        }
    }
}

fn validate(slot: ModelSlot, model: &Model) -> Result<(), ModelLibraryError> {
    let stride = slot.stride();
    if model.vertices.len() % stride != 0 {
        return Err(ModelLibraryError::BadStride {
            slot,
            len: model.vertices.len(),
            stride,
        });
    }
    let vertices = model.vertex_count(stride);
    if let Some(&index) = model.indices.iter().find(|&&i| i as usize >= vertices) {
        return Err(ModelLibraryError::IndexOutOfRange {
            slot,
            index,
            vertices,
        });
    }
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, needed: usize) -> Result<&'a [u8], ModelBlobError> {
        let end = self
            .offset
            .checked_add(needed)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(ModelBlobError::Truncated {
                offset: self.offset,
                needed,
                len: self.bytes.len(),
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32, ModelBlobError> {
        let b = self.take(WORD)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// Decode every model in a `combined.blob`.
pub fn parse_model_blob(bytes: &[u8]) -> Result<Vec<Model>, ModelBlobError> {
    let mut r = Reader { bytes, offset: 0 };
    let count = r.u32()? as usize;
    let sizes = (0..count)
        .map(|_| r.u32().map(|s| s as usize))
        .collect::<Result<Vec<_>, _>>()?;

    let mut models = Vec::with_capacity(sizes.len());
    for (model, &record) in sizes.iter().enumerate() {
        let start = r.offset;
        // whole record must be present before it is sliced
        r.take(record)?;
        let mut rec = Reader {
            bytes: &bytes[start..start + record],
            offset: 0,
        };
        let vertex_count = rec.u32()? as usize;
        let index_count = rec.u32()? as usize;
        let payload = vertex_count
            .saturating_mul(WORD)
            .saturating_add(index_count.saturating_mul(2))
            .saturating_add(RECORD_HEADER);
        if payload > record {
            return Err(ModelBlobError::RecordOverflow {
                model,
                payload,
                record,
            });
        }
        let vertices = rec
            .take(vertex_count * WORD)?
            .chunks_exact(WORD)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let indices = rec
            .take(index_count * 2)?
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        models.push(Model { vertices, indices });
    }
    log::debug!("model blob: {} records, {} bytes", models.len(), bytes.len());
    Ok(models)
}

/// Encode models into the blob layout read by [`parse_model_blob`].
pub fn encode_model_blob(models: &[Model]) -> Vec<u8> {
    let header = WORD * (1 + models.len());
    let total = header + models.iter().map(Model::record_size).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&(models.len() as u32).to_le_bytes());
    for m in models {
        out.extend_from_slice(&(m.record_size() as u32).to_le_bytes());
    }
    for m in models {
        let start = out.len();
        out.extend_from_slice(&(m.vertices.len() as u32).to_le_bytes());
        out.extend_from_slice(&(m.indices.len() as u32).to_le_bytes());
        for v in &m.vertices {
            out.extend_from_slice(&v.to_le_bytes());
        }
        for i in &m.indices {
            out.extend_from_slice(&i.to_le_bytes());
        }
        out.resize(start + m.record_size(), 0);
    }
    out
}
