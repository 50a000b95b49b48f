use globe_core::particles::*;
use globe_core::quake::QuakeCatalog;
use globe_core::texture::*;
use std::io::Cursor;

#[test]
fn embedded_background_decodes() {
    let tex = decode_background().expect("background png");
    assert_eq!((tex.width, tex.height), (4, 64));
    assert_eq!(tex.rgba.len(), (tex.width * tex.height * 4) as usize);
    // fully opaque
    assert!(tex.rgba.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn png_bytes_decode_to_rgba() {
    let mut img = image::RgbaImage::new(3, 2);
    img.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    let tex = decode_png(&bytes).unwrap();
    assert_eq!((tex.width, tex.height), (3, 2));
    let last = &tex.rgba[tex.rgba.len() - 4..];
    assert_eq!(last, &[10, 20, 30, 40]);
}

#[test]
fn garbage_is_rejected() {
    assert!(matches!(decode_png(b"nope"), Err(TextureError::Image(_))));
    assert!(matches!(
        decode_base64_png("***"),
        Err(TextureError::Base64(_))
    ));
}

#[test]
fn every_fetched_slot_has_a_png_url() {
    for slot in TextureSlot::ALL {
        match slot {
            TextureSlot::Background => assert!(slot.url().is_none()),
            _ => assert!(slot.url().unwrap().ends_with(".png")),
        }
    }
}

#[test]
fn bokeh_particles_sit_in_shell_and_are_deterministic() {
    let a = bokeh_particles(200, 9);
    let b = bokeh_particles(200, 9);
    assert_eq!(a.len(), 200);
    for (p, q) in a.iter().zip(&b) {
        assert_eq!(bytemuck::bytes_of(p), bytemuck::bytes_of(q));
        let r = glam::Vec3::from_array(p.pos).length();
        assert!((BOKEH_SHELL_MIN - 1e-3..=BOKEH_SHELL_MAX + 1e-3).contains(&r));
        assert!(p.size > 0.0 && p.size <= 1.0);
    }
    assert!(bokeh_particles(0, 1).is_empty());
}

#[test]
fn quake_instances_follow_catalog() {
    let catalog = QuakeCatalog::embedded().unwrap();
    let inst = quake_instances(catalog.as_slice());
    assert_eq!(inst.len(), catalog.len());
    for (i, q) in inst.iter().zip(catalog.iter()) {
        assert_eq!(i.magnitude, q.magnitude);
        let r = glam::Vec3::from_array(i.pos).length();
        assert!(r > 1.0 && r < 1.05);
    }
    assert_eq!(std::mem::size_of::<QuakeInstance>(), 16);
    assert_eq!(std::mem::size_of::<BokehInstance>(), 32);
}
