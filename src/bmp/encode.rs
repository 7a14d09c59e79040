//! BMP encoder: uncompressed 24-bit and 32-bit BMP, always top-down.

use alloc::vec::Vec;

use super::file_header::{FILE_HEADER_SIZE, FileHeader};
use super::info_header::InfoHeader;
use crate::image::Image;
use crate::pixel::BitDepth;

/// Encode `image` as a complete BMP file.
pub(crate) fn encode_bmp(image: &Image, depth: BitDepth) -> Vec<u8> {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let row_stride = depth.row_stride(w);
    let pixel_data_size = row_stride * h;

    let info = InfoHeader::for_encode(image.width(), image.height(), depth, pixel_data_size);
    let info_len = info.byte_len();
    let file = FileHeader::for_encode(pixel_data_size, info_len as u32);

    let mut out = Vec::with_capacity(FILE_HEADER_SIZE + info_len + pixel_data_size);
    file.write(&mut out);
    info.write(&mut out);

    match depth {
        BitDepth::Rgb24 => encode_24bit(&mut out, image.rgba(), w, row_stride),
        BitDepth::Rgba32 => encode_32bit(&mut out, image.rgba()),
    }
    out
}

fn encode_24bit(out: &mut Vec<u8>, rgba: &[u8], w: usize, row_stride: usize) {
    let pad_bytes = row_stride - w * 3;
    for row in rgba.chunks_exact(w * 4) {
        for px in row.chunks_exact(4) {
            out.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
}

fn encode_32bit(out: &mut Vec<u8>, rgba: &[u8]) {
    for px in rgba.chunks_exact(4) {
        out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
}
