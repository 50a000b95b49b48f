use crate::geo::lat_lng_to_vec3;
use glam::Vec3;
use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

static EMBEDDED_GEOJSON: &str = include_str!("../data/quakes.geojson");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("earthquake feed is not valid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feature {index} has no usable [lng, lat] coordinates")]
    Coordinates { index: usize },
}

/// One earthquake from the feed. Built once at load time and never mutated.
#[derive(Clone, Debug)]
pub struct Earthquake {
    pub magnitude: f32,
    pub place: String,
    pub lat: f32,
    pub lng: f32,
    pub depth_km: f32,
    pub time_ms: i64,
    /// Position on the unit sphere.
    pub pos: Vec3,
    /// The untouched GeoJSON feature this record came from.
    pub feature: Value,
}

impl Earthquake {
    pub fn label(&self) -> String {
        if self.place.is_empty() {
            format!("M {:.1}", self.magnitude)
        } else {
            format!("M {:.1} · {}", self.magnitude, self.place)
        }
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Value>,
}

/// In-memory earthquake records parsed from a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default)]
pub struct QuakeCatalog {
    quakes: Vec<Earthquake>,
}

impl QuakeCatalog {
    /// Parse the snapshot compiled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_geojson_str(EMBEDDED_GEOJSON)
    }

    pub fn from_geojson_str(payload: &str) -> Result<Self, DataError> {
        let collection: FeatureCollection = serde_json::from_str(payload)?;
        let quakes = collection
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| parse_feature(index, feature))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed {} earthquake features", quakes.len());
        Ok(Self { quakes })
    }

    pub fn from_quakes(quakes: Vec<Earthquake>) -> Self {
        Self { quakes }
    }

    pub fn len(&self) -> usize {
        self.quakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quakes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Earthquake> {
        self.quakes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Earthquake> {
        self.quakes.iter()
    }

    pub fn as_slice(&self) -> &[Earthquake] {
        &self.quakes
    }

    /// Index of the record facing `toward_camera` the most (largest dot
    /// product). Ties keep the earliest record.
    pub fn most_pertinent(&self, toward_camera: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, q) in self.quakes.iter().enumerate() {
            let d = q.pos.dot(toward_camera);
            match best {
                Some((_, bd)) if d <= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Indices of records with `dot >= min_dot`, best-facing first.
    pub fn pertinent_candidates(
        &self,
        toward_camera: Vec3,
        min_dot: f32,
    ) -> SmallVec<[usize; 16]> {
        let mut scored: SmallVec<[(usize, f32); 16]> = self
            .quakes
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.pos.dot(toward_camera)))
            .filter(|&(_, d)| d >= min_dot)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.into_iter().map(|(i, _)| i).collect()
    }

    pub fn strongest(&self) -> Option<&Earthquake> {
        self.quakes
            .iter()
            .reduce(|a, b| if b.magnitude > a.magnitude { b } else { a })
    }
}

fn parse_feature(index: usize, feature: Value) -> Result<Earthquake, DataError> {
    let props = feature.get("properties");
    let magnitude = props
        .and_then(|p| p.get("mag"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0) as f32;
    let place = props
        .and_then(|p| p.get("place"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let time_ms = props
        .and_then(|p| p.get("time"))
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let coords = feature
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .ok_or(DataError::Coordinates { index })?;
    let coord = |i: usize| coords.get(i).and_then(Value::as_f64);
    let (lng, lat) = match (coord(0), coord(1)) {
        (Some(lng), Some(lat)) => (lng as f32, lat as f32),
        _ => return Err(DataError::Coordinates { index }),
    };
    let depth_km = coord(2).unwrap_or(0.0) as f32;

    Ok(Earthquake {
        magnitude,
        place,
        lat,
        lng,
        depth_km,
        time_ms,
        pos: lat_lng_to_vec3(lat, lng),
        feature,
    })
}
