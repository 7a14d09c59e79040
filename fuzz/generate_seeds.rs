#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal BMP 1x1 24-bit, bottom-up
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp24_1x1.bmp"), &bmp).unwrap();

    // 2x1 32-bit BI_BITFIELDS, V3 header, top-down
    let mut bmp = vec![0u8; 78]; // 70 header + 8 pixel
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&78u32.to_le_bytes());
    bmp[10..14].copy_from_slice(&70u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&56u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&2i32.to_le_bytes());
    bmp[22..26].copy_from_slice(&(-1i32).to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes());
    bmp[28..30].copy_from_slice(&32u16.to_le_bytes());
    bmp[30..34].copy_from_slice(&3u32.to_le_bytes()); // BI_BITFIELDS
    bmp[54..58].copy_from_slice(&0x00FF_0000u32.to_le_bytes());
    bmp[58..62].copy_from_slice(&0x0000_FF00u32.to_le_bytes());
    bmp[62..66].copy_from_slice(&0x0000_00FFu32.to_le_bytes());
    bmp[66..70].copy_from_slice(&0xFF00_0000u32.to_le_bytes());
    bmp[70..78].copy_from_slice(&[0x10, 0x20, 0x30, 0x80, 0x40, 0x50, 0x60, 0xff]);
    fs::write(format!("{dir}/bmp32_bitfields_2x1.bmp"), &bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/header_only.bin"), &bmp[..54]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
