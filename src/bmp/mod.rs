//! BMP wire format: headers, pixel decoder and pixel encoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::encode24`], etc.

mod decode;
mod encode;
mod file_header;
mod info_header;
mod utils;

pub use info_header::ChannelMasks;

use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::{BitDepth, Compression};
use alloc::vec::Vec;
use enough::Stop;

/// Header summary returned by [`crate::probe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
    pub compression: Compression,
    /// True when rows are stored top-down (negative height on disk).
    pub top_down: bool,
    /// Declared info header size (`biSize`).
    pub header_size: u32,
    pub masks: ChannelMasks,
}

pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    let (_, info) = decode::parse_headers(data)?;
    Ok(BmpInfo {
        width: info.width.unsigned_abs(),
        height: info.height.unsigned_abs(),
        bit_depth: BitDepth::from_bit_count(info.bit_count)?,
        compression: Compression::from_code(info.compression)?,
        top_down: info.top_down(),
        header_size: info.size,
        masks: info.masks,
    })
}

/// Decode BMP data into a top-down RGBA image.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let (file, info) = decode::parse_headers(data)?;
    let width = info.width.unsigned_abs();
    let height = info.height.unsigned_abs();
    check_limits(limits, width, height)?;
    stop.check()?;
    let rgba = decode::decode_pixels(&file, &info, data, stop)?;
    Image::new(width, height, rgba)
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BmpError> {
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(width as usize * height as usize * 4)?;
    }
    Ok(())
}

/// Encode to BMP.
pub(crate) fn encode(image: &Image, depth: BitDepth) -> Vec<u8> {
    encode::encode_bmp(image, depth)
}
