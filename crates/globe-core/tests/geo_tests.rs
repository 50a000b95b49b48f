use globe_core::geo::*;

#[test]
fn equator_and_poles_land_on_expected_axes() {
    let north = lat_lng_to_vec3(90.0, 0.0);
    assert!((north - glam::Vec3::Y).length() < 1e-5);
    let south = lat_lng_to_vec3(-90.0, 45.0);
    assert!((south + glam::Vec3::Y).length() < 1e-5);
    // lng 0 on the equator faces +X after the 180 degree offset
    let greenwich = lat_lng_to_vec3(0.0, 0.0);
    assert!((greenwich - glam::Vec3::X).length() < 1e-5);
}

#[test]
fn projection_is_on_unit_sphere() {
    for lat in (-90..=90).step_by(15) {
        for lng in (-180..=180).step_by(20) {
            let v = lat_lng_to_vec3(lat as f32, lng as f32);
            assert!((v.length() - 1.0).abs() < 1e-5, "lat={lat} lng={lng}");
        }
    }
}

#[test]
fn lat_lng_round_trips_away_from_poles() {
    for lat in (-85..=85).step_by(5) {
        for lng in (-180..=180).step_by(7) {
            let p = GeoPoint::new(lat as f32, lng as f32);
            let back = vec3_to_lat_lng(p.to_vec3());
            assert!((back.lat - p.lat).abs() < 1e-3, "lat {p:?} -> {back:?}");
            // -180 and 180 are the same meridian
            let dlng = wrap_lng(back.lng - p.lng).abs();
            assert!(dlng < 1e-3 || (360.0 - dlng) < 1e-3, "lng {p:?} -> {back:?}");
        }
    }
}

#[test]
fn round_trip_at_poles_keeps_latitude() {
    let back = vec3_to_lat_lng(lat_lng_to_vec3(90.0, 33.0));
    assert!((back.lat - 90.0).abs() < 1e-3);
    let back = vec3_to_lat_lng(lat_lng_to_vec3(-90.0, -120.0));
    assert!((back.lat + 90.0).abs() < 1e-3);
}

#[test]
fn inverse_accepts_unnormalized_vectors() {
    let v = lat_lng_to_vec3(35.0, 139.0) * 6.5;
    let p = vec3_to_lat_lng(v);
    assert!((p.lat - 35.0).abs() < 1e-3);
    assert!((p.lng - 139.0).abs() < 1e-3);
}

#[test]
fn wrap_lng_stays_in_range() {
    assert!((wrap_lng(190.0) + 170.0).abs() < 1e-4);
    assert!((wrap_lng(-190.0) - 170.0).abs() < 1e-4);
    assert!((wrap_lng(720.0 + 15.0) - 15.0).abs() < 1e-3);
}

#[test]
fn angular_distance_matches_known_angles() {
    let a = GeoPoint::new(0.0, 0.0);
    assert!((angular_distance_deg(a, GeoPoint::new(0.0, 90.0)) - 90.0).abs() < 1e-2);
    assert!((angular_distance_deg(a, GeoPoint::new(0.0, 180.0)) - 180.0).abs() < 1e-2);
    assert!(angular_distance_deg(a, a) < 1e-2);
}
