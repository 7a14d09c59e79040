#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic; a decoded image always has a full buffer.
    if let Ok(img) = bmprgba::decode(data) {
        assert_eq!(
            img.rgba().len(),
            img.width() as usize * img.height() as usize * 4
        );
    }
    let _ = bmprgba::probe(data);
    let _ = bmprgba::DecodeRequest::new(data).decode(enough::Unstoppable);
});
