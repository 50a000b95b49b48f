//! Latitude/longitude to unit-sphere conversion.
//!
//! The globe uses a Y-up frame: the north pole sits at +Y, longitude 0
//! faces +X after the `lng + 180` offset and longitude -90 faces +Z.

use glam::Vec3;

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f32,
    pub lng: f32,
}

impl GeoPoint {
    pub fn new(lat: f32, lng: f32) -> Self {
        Self { lat, lng }
    }

    pub fn to_vec3(self) -> Vec3 {
        lat_lng_to_vec3(self.lat, self.lng)
    }
}

/// Project a latitude/longitude pair (degrees) onto the unit sphere.
pub fn lat_lng_to_vec3(lat_deg: f32, lng_deg: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(-sin_phi * cos_theta, cos_phi, sin_phi * sin_theta)
}

/// Inverse of [`lat_lng_to_vec3`]. The input does not need to be normalized.
///
/// Longitude is wrapped into `[-180, 180]`; at the poles it is meaningless.
pub fn vec3_to_lat_lng(v: Vec3) -> GeoPoint {
    let n = v.normalize_or_zero();
    let phi = n.y.clamp(-1.0, 1.0).acos();
    let lat = 90.0 - phi.to_degrees();
    let theta = n.z.atan2(-n.x);
    GeoPoint::new(lat, wrap_lng(theta.to_degrees() - 180.0))
}

/// Wrap a longitude in degrees into `[-180, 180]`.
pub fn wrap_lng(lng_deg: f32) -> f32 {
    (lng_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Great-circle angle between two points, in degrees.
pub fn angular_distance_deg(a: GeoPoint, b: GeoPoint) -> f32 {
    let d = a.to_vec3().dot(b.to_vec3()).clamp(-1.0, 1.0);
    d.acos().to_degrees()
}
