use globe_core::model::*;

fn sample_models() -> Vec<Model> {
    vec![
        // globe: 3 points, 4 floats each, no indices
        Model::new((0..12).map(|i| i as f32 * 0.5).collect(), vec![]),
        // ring: 4 vertices of 5 floats, odd index count forces padding
        Model::new((0..20).map(|i| -(i as f32)).collect(), vec![0, 1, 2]),
        // nebula: quad
        Model::new(vec![0.25; 20], vec![0, 1, 2, 0, 2, 3]),
    ]
}

#[test]
fn parse_reconstructs_every_model() {
    let models = sample_models();
    let blob = encode_model_blob(&models);
    let parsed = parse_model_blob(&blob).expect("valid blob");
    assert_eq!(parsed.len(), models.len());
    for (got, want) in parsed.iter().zip(&models) {
        assert_eq!(got.vertices.len(), want.vertices.len());
        assert_eq!(got.indices.len(), want.indices.len());
    }
    assert_eq!(parsed, models);
}

#[test]
fn blob_header_matches_documented_layout() {
    let models = sample_models();
    let blob = encode_model_blob(&models);
    let word = |i: usize| u32::from_le_bytes(blob[i * 4..i * 4 + 4].try_into().unwrap());
    assert_eq!(word(0), 3);
    // 8 byte header + 12 floats
    assert_eq!(word(1), 8 + 48);
    // 8 + 20 floats + 3 u16 = 94, padded to 96
    assert_eq!(word(2), 96);
    // first record starts right after the size table
    assert_eq!(word(4), 12);
    assert_eq!(word(5), 0);
    assert_eq!(blob.len(), 16 + 56 + 96 + (8 + 80 + 12));
}

#[test]
fn empty_blob_with_zero_models_parses() {
    let blob = 0u32.to_le_bytes();
    assert!(parse_model_blob(&blob).unwrap().is_empty());
}

#[test]
fn truncated_blob_fails() {
    let blob = encode_model_blob(&sample_models());
    for cut in [0, 3, 10, blob.len() / 2, blob.len() - 1] {
        assert!(
            matches!(
                parse_model_blob(&blob[..cut]),
                Err(ModelBlobError::Truncated { .. })
            ),
            "cut at {cut}"
        );
    }
}

#[test]
fn record_smaller_than_payload_fails() {
    let mut blob = encode_model_blob(&sample_models()[..1]);
    // shrink the declared record size below the 56 byte payload
    blob[4..8].copy_from_slice(&40u32.to_le_bytes());
    assert_eq!(
        parse_model_blob(&blob),
        Err(ModelBlobError::RecordOverflow {
            model: 0,
            payload: 56,
            record: 40
        })
    );
}

#[test]
fn library_slices_models_by_name() {
    let lib = ModelLibrary::from_blob(&encode_model_blob(&sample_models())).unwrap();
    assert_eq!(lib.globe.vertex_count(ModelSlot::Globe.stride()), 3);
    assert_eq!(lib.ring.indices, vec![0, 1, 2]);
    assert_eq!(lib.get(ModelSlot::Nebula).unwrap().indices.len(), 6);
    assert!(lib.get(ModelSlot::Background).is_none());
}

#[test]
fn library_rejects_short_blob() {
    let blob = encode_model_blob(&sample_models()[..2]);
    assert_eq!(
        ModelLibrary::from_blob(&blob).unwrap_err(),
        ModelLoadError::Library(ModelLibraryError::MissingModel {
            found: 2,
            expected: 3
        })
    );
}

#[test]
fn library_rejects_bad_stride_and_indices() {
    let mut models = sample_models();
    models[0].vertices.pop();
    assert!(matches!(
        ModelLibrary::from_models(models),
        Err(ModelLibraryError::BadStride {
            slot: ModelSlot::Globe,
            ..
        })
    ));

    let mut models = sample_models();
    models[2].indices.push(4);
    assert!(matches!(
        ModelLibrary::from_models(models),
        Err(ModelLibraryError::IndexOutOfRange {
            slot: ModelSlot::Nebula,
            index: 4,
            ..
        })
    ));
}

#[test]
fn background_quad_is_well_formed() {
    let quad = Model::background_quad();
    let stride = ModelSlot::Background.stride();
    assert_eq!(quad.vertices.len() % stride, 0);
    assert_eq!(quad.vertex_count(stride), 4);
    assert!(quad.indices.iter().all(|&i| (i as usize) < 4));
}

#[test]
fn vertex_byte_strides_match_shader_layouts() {
    const GLOBE: usize = ModelSlot::Globe.stride() * 4;
    const MESH: usize = ModelSlot::Ring.stride() * 4;
    assert_eq!(GLOBE, 16);
    assert_eq!(MESH, 20);
    assert_eq!(ModelSlot::Nebula.stride(), ModelSlot::Ring.stride());
    assert_eq!(ModelSlot::Background.stride() * 4, 16);
}

#[test]
fn blob_urls_follow_device_class() {
    assert_eq!(DeviceClass::Mobile.blob_url(), "/bin/mobile/combined.blob");
    assert_eq!(DeviceClass::Desktop.blob_url(), "/bin/desktop/combined.blob");
}

#[test]
fn device_class_from_viewport() {
    let desktop_ua = "Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0";
    let phone_ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0) Mobile/15E148 Safari/604.1";
    assert_eq!(DeviceClass::from_viewport(1440.0, desktop_ua), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport(600.0, desktop_ua), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport(768.0, desktop_ua), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport(1024.0, phone_ua), DeviceClass::Mobile);
}
