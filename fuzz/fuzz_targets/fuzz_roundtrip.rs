#![no_main]
use bmprgba::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode(data) else {
        return;
    };

    let Ok(decoded32) = decode(&encode32(&decoded)) else {
        panic!("re-encoded 32-bit data failed to decode");
    };
    assert_eq!(
        decoded.rgba(),
        decoded32.rgba(),
        "32-bit roundtrip pixel mismatch"
    );
    assert_eq!(decoded.width(), decoded32.width());
    assert_eq!(decoded.height(), decoded32.height());

    let Ok(decoded24) = decode(&encode24(&decoded)) else {
        panic!("re-encoded 24-bit data failed to decode");
    };
    let original = decoded.rgba().chunks_exact(4);
    for (a, b) in original.zip(decoded24.rgba().chunks_exact(4)) {
        assert_eq!(&a[..3], &b[..3], "24-bit roundtrip color mismatch");
        assert_eq!(b[3], 255);
    }
});
