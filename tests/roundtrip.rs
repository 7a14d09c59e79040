use bmprgba::*;

#[test]
fn bmp32_roundtrip_exact() {
    let pixels = vec![
        255, 0, 0, 255, 0, 255, 0, 128, // row 0
        0, 0, 255, 64, 128, 128, 128, 0, // row 1
    ];
    let img = Image::new(2, 2, pixels.clone()).unwrap();

    let encoded = encode32(&img);
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.rgba(), &pixels[..]);
}

#[test]
fn bmp24_roundtrip_drops_alpha() {
    let pixels = vec![
        255, 0, 0, 10, 0, 255, 0, 20, 0, 0, 255, 30, // row 0: R G B
        128, 128, 128, 40, 64, 64, 64, 50, 0, 0, 0, 60, // row 1: gray dark black
    ];
    let img = Image::new(3, 2, pixels.clone()).unwrap();

    let decoded = decode(&encode24(&img)).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    for (got, want) in decoded.rgba().chunks_exact(4).zip(pixels.chunks_exact(4)) {
        assert_eq!(&got[..3], &want[..3]);
        assert_eq!(got[3], 255);
    }
}

#[test]
fn encode24_one_pixel() {
    let img = Image::new(1, 1, vec![10, 20, 30, 255]).unwrap();
    let encoded = encode24(&img);
    assert_eq!(encoded.len(), 14 + 40 + 4);
    assert_eq!(&encoded[54..], &[30, 20, 10, 0]);
}

#[test]
fn encode_dispatch_matches_helpers() {
    let img = Image::solid(3, 3, RGBA8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(encode(&img, BitDepth::Rgb24), encode24(&img));
    assert_eq!(encode(&img, BitDepth::Rgba32), encode32(&img));
}

#[test]
fn probe_reports_headers() {
    let img = Image::solid(7, 5, RGBA8::new(0, 0, 0, 0)).unwrap();

    let info = probe(&encode32(&img)).unwrap();
    assert_eq!((info.width, info.height), (7, 5));
    assert_eq!(info.bit_depth, BitDepth::Rgba32);
    assert_eq!(info.compression, Compression::Bitfields);
    assert!(info.top_down);
    assert_eq!(info.header_size, 56);
    assert_eq!(
        info.masks,
        ChannelMasks::Rgba {
            red: 0x00FF_0000,
            green: 0x0000_FF00,
            blue: 0x0000_00FF,
            alpha: 0xFF00_0000,
        }
    );

    let info = probe(&encode24(&img)).unwrap();
    assert_eq!(info.bit_depth, BitDepth::Rgb24);
    assert_eq!(info.compression, Compression::Rgb);
    assert_eq!(info.masks, ChannelMasks::None);
}

#[test]
fn limits_reject_large() {
    let img = Image::solid(1, 2, RGBA8::new(255, 255, 255, 255)).unwrap();
    let encoded = encode24(&img);

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BmpError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(7),
        ..Default::default()
    };
    assert!(
        DecodeRequest::new(&encoded)
            .with_limits(&limits)
            .decode(Unstoppable)
            .is_err()
    );
}

#[test]
fn premultiplied_bridge_roundtrip() {
    let img = Image::new(2, 1, vec![255, 128, 0, 255, 200, 100, 50, 0]).unwrap();
    let premul = img.to_premultiplied();
    assert_eq!(premul, vec![255, 128, 0, 255, 0, 0, 0, 0]);
    let back = Image::from_premultiplied(2, 1, premul).unwrap();
    assert_eq!(back.rgba(), &[255, 128, 0, 255, 0, 0, 0, 0]);
}

#[cfg(feature = "typed")]
#[test]
fn typed_pixel_view() {
    let img = Image::solid(2, 2, RGBA8::new(9, 8, 7, 6)).unwrap();
    let px = img.as_pixels();
    assert_eq!(px.len(), 4);
    assert!(px.iter().all(|p| *p == RGBA8::new(9, 8, 7, 6)));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let img = Image::solid(3, 2, RGBA8::new(1, 1, 1, 1)).unwrap();
    let view = img.as_imgref();
    assert_eq!(view.width(), 3);
    assert_eq!(view.height(), 2);
    assert_eq!(img.to_imgvec().buf().len(), 6);
}
