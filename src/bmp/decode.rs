//! BMP pixel decoder: 24-bit BGR and 32-bit BGRA/bitfields to top-down RGBA.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::file_header::FileHeader;
use super::info_header::InfoHeader;
use super::utils::Bitfields;
use crate::error::BmpError;
use crate::pixel::{BitDepth, Compression};

/// Parse and validate both headers.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BmpError> {
    let file = FileHeader::parse(data)?;
    let info = InfoHeader::parse(data)?;
    Ok((file, info))
}

/// Decode the pixel region of `data` (everything from the pixel offset on).
pub(crate) fn decode_pixels(
    file: &FileHeader,
    info: &InfoHeader,
    data: &[u8],
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let src = data
        .get(file.pixel_offset as usize..)
        .ok_or(BmpError::UnexpectedEof)?;

    // Re-check format fields before dispatch.
    let depth = BitDepth::from_bit_count(info.bit_count)?;
    let compression = Compression::from_code(info.compression)?;

    let width = info.width.unsigned_abs() as usize;
    let height = info.height.unsigned_abs() as usize;
    if width == 0 || height == 0 {
        return Err(BmpError::InvalidHeader("BMP has zero dimension".into()));
    }

    let stride = depth.row_stride(width);
    let needed = stride
        .checked_mul(height)
        .ok_or(BmpError::InvalidDimensions {
            width: i64::from(info.width),
            height: i64::from(info.height),
        })?;
    if src.len() < needed {
        log::debug!("BMP pixel data truncated: need {needed}, got {}", src.len());
        return Err(BmpError::InsufficientData {
            needed,
            actual: src.len(),
        });
    }
    let src = &src[..needed];

    let row_bytes = width * 4;
    let mut out = vec![0u8; row_bytes * height];
    let top_down = info.top_down();

    match (depth, compression) {
        (BitDepth::Rgb24, _) => {
            for_each_row(
                &mut out,
                src,
                row_bytes,
                stride,
                top_down,
                stop,
                |dst, row| {
                    for (px, bgr) in dst.chunks_exact_mut(4).zip(row.chunks_exact(3)) {
                        px.copy_from_slice(&[bgr[2], bgr[1], bgr[0], 0xFF]);
                    }
                },
            )?;
        }
        (BitDepth::Rgba32, Compression::Rgb) => {
            for_each_row(
                &mut out,
                src,
                row_bytes,
                stride,
                top_down,
                stop,
                |dst, row| {
                    for (px, bgra) in dst.chunks_exact_mut(4).zip(row.chunks_exact(4)) {
                        px.copy_from_slice(&[bgra[2], bgra[1], bgra[0], 0xFF]);
                    }
                },
            )?;
        }
        (BitDepth::Rgba32, Compression::Bitfields) => {
            let fields = Bitfields::new(info.masks.to_array())?;
            for_each_row(
                &mut out,
                src,
                row_bytes,
                stride,
                top_down,
                stop,
                |dst, row| {
                    for (px, raw) in dst.chunks_exact_mut(4).zip(row.chunks_exact(4)) {
                        let word = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
                        px.copy_from_slice(&fields.unpack(word));
                    }
                },
            )?;
        }
    }

    log::trace!(
        "decoded {width}x{height} {}-bit BMP ({})",
        depth.bit_count(),
        if top_down { "top-down" } else { "bottom-up" }
    );
    Ok(out)
}

/// Pair each output row with its source row, flipping bottom-up sources.
fn for_each_row(
    out: &mut [u8],
    src: &[u8],
    row_bytes: usize,
    stride: usize,
    top_down: bool,
    stop: &dyn Stop,
    mut convert: impl FnMut(&mut [u8], &[u8]),
) -> Result<(), BmpError> {
    let rows = src.chunks_exact(stride);
    let dst_rows = out.chunks_exact_mut(row_bytes);
    if top_down {
        for (row_idx, (dst, row)) in dst_rows.zip(rows).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            convert(dst, row);
        }
    } else {
        for (row_idx, (dst, row)) in dst_rows.rev().zip(rows).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            convert(dst, row);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::info_header::ChannelMasks;
    use enough::Unstoppable;

    fn headers(width: i32, height: i32, bits: u16, compression: u32) -> (FileHeader, InfoHeader) {
        let file = FileHeader::for_encode(0, 40);
        let info = InfoHeader {
            size: 40,
            width,
            height,
            planes: 1,
            bit_count: bits,
            compression,
            image_size: 0,
            x_pels_per_meter: 0,
            y_pels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
            masks: ChannelMasks::None,
        };
        (file, info)
    }

    fn with_prefix(pixels: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 54];
        data.extend_from_slice(pixels);
        data
    }

    #[test]
    fn rgb24_bottom_up_with_padding() {
        let (file, info) = headers(1, 2, 24, 0);
        // Row 0 on disk is the visual bottom.
        let data = with_prefix(&[1, 2, 3, 0xAA, 4, 5, 6, 0xBB]);
        let out = decode_pixels(&file, &info, &data, &Unstoppable).unwrap();
        assert_eq!(out, [6, 5, 4, 255, 3, 2, 1, 255]);
    }

    #[test]
    fn rgb24_top_down() {
        let (file, info) = headers(1, -2, 24, 0);
        let data = with_prefix(&[1, 2, 3, 0, 4, 5, 6, 0]);
        let out = decode_pixels(&file, &info, &data, &Unstoppable).unwrap();
        assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
    }

    #[test]
    fn rgb24_truncated_padding_fails() {
        let (file, info) = headers(1, 2, 24, 0);
        let data = with_prefix(&[1, 2, 3, 0, 4, 5, 6]);
        assert!(matches!(
            decode_pixels(&file, &info, &data, &Unstoppable),
            Err(BmpError::InsufficientData {
                needed: 8,
                actual: 7,
            })
        ));
    }

    #[test]
    fn rgb32_forces_opaque_alpha() {
        let (file, info) = headers(2, -1, 32, 0);
        let data = with_prefix(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let out = decode_pixels(&file, &info, &data, &Unstoppable).unwrap();
        assert_eq!(out, [3, 2, 1, 255, 7, 6, 5, 255]);
    }

    #[test]
    fn bitfields_use_masks() {
        let (file, mut info) = headers(1, 1, 32, 3);
        info.masks = ChannelMasks::Rgba {
            red: 0x0000_00FF,
            green: 0x0000_FF00,
            blue: 0x00FF_0000,
            alpha: 0xFF00_0000,
        };
        let data = with_prefix(&[10, 20, 30, 40]);
        let out = decode_pixels(&file, &info, &data, &Unstoppable).unwrap();
        assert_eq!(out, [10, 20, 30, 40]);
    }

    #[test]
    fn bitfields_reject_wide_mask() {
        let (file, mut info) = headers(1, 1, 32, 3);
        info.masks = ChannelMasks::Rgb {
            red: 0xFFFF_0000,
            green: 0x0000_FF00,
            blue: 0x0000_00FF,
        };
        let data = with_prefix(&[0, 0, 0, 0]);
        assert!(matches!(
            decode_pixels(&file, &info, &data, &Unstoppable),
            Err(BmpError::InvalidMask { .. })
        ));
    }

    #[test]
    fn rechecks_format_fields() {
        let (file, info) = headers(1, 1, 16, 0);
        let data = with_prefix(&[0; 8]);
        assert!(decode_pixels(&file, &info, &data, &Unstoppable).is_err());
        let (file, info) = headers(1, 1, 24, 1);
        assert!(decode_pixels(&file, &info, &data, &Unstoppable).is_err());
    }
}
