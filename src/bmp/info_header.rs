//! `BITMAPINFOHEADER` and its V2/V3 mask extensions.

use alloc::vec::Vec;

use super::file_header::FILE_HEADER_SIZE;
use crate::bytes::{LeInt, read_at};
use crate::error::BmpError;
use crate::limits::MAX_DIMENSION;
use crate::pixel::{BitDepth, Compression};

pub(crate) const BASE_INFO_SIZE: usize = 40;
pub(crate) const V2_INFO_SIZE: usize = 52;
pub(crate) const V3_INFO_SIZE: usize = 56;

const MASKS_OFFSET: usize = FILE_HEADER_SIZE + BASE_INFO_SIZE;

/// Standard 32-bit masks: one byte per channel in a little-endian word.
pub(crate) const STANDARD_MASKS: ChannelMasks = ChannelMasks::Rgba {
    red: 0x00FF_0000,
    green: 0x0000_FF00,
    blue: 0x0000_00FF,
    alpha: 0xFF00_0000,
};

/// Channel masks carried by the header, tagged by which extension supplied them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMasks {
    /// No masks present.
    None,
    /// BITMAPV2INFOHEADER-style red/green/blue masks.
    Rgb { red: u32, green: u32, blue: u32 },
    /// BITMAPV3INFOHEADER-style masks including alpha.
    Rgba {
        red: u32,
        green: u32,
        blue: u32,
        alpha: u32,
    },
}

impl ChannelMasks {
    /// Masks as `[red, green, blue, alpha]`, absent entries zero.
    pub fn to_array(self) -> [u32; 4] {
        match self {
            Self::None => [0; 4],
            Self::Rgb { red, green, blue } => [red, green, blue, 0],
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => [red, green, blue, alpha],
        }
    }

    /// Number of mask bytes this variant occupies after the base header.
    fn extension_len(self) -> usize {
        match self {
            Self::None => 0,
            Self::Rgb { .. } => V2_INFO_SIZE - BASE_INFO_SIZE,
            Self::Rgba { .. } => V3_INFO_SIZE - BASE_INFO_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
    pub masks: ChannelMasks,
}

impl InfoHeader {
    /// Parse and validate the info header following the file header in `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < FILE_HEADER_SIZE + BASE_INFO_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        let at = |rel: usize| FILE_HEADER_SIZE + rel;
        let mut header = Self {
            size: read_at(data, at(0))?,
            width: read_at(data, at(4))?,
            height: read_at(data, at(8))?,
            planes: read_at(data, at(12))?,
            bit_count: read_at(data, at(14))?,
            compression: read_at(data, at(16))?,
            image_size: read_at(data, at(20))?,
            x_pels_per_meter: read_at(data, at(24))?,
            y_pels_per_meter: read_at(data, at(28))?,
            colors_used: read_at(data, at(32))?,
            colors_important: read_at(data, at(36))?,
            masks: ChannelMasks::None,
        };
        header.validate()?;

        if header.compression == Compression::BI_BITFIELDS
            && data.len() >= FILE_HEADER_SIZE + V2_INFO_SIZE
        {
            let red = read_at(data, MASKS_OFFSET)?;
            let green = read_at(data, MASKS_OFFSET + 4)?;
            let blue = read_at(data, MASKS_OFFSET + 8)?;
            header.masks = if header.size as usize >= V3_INFO_SIZE
                && data.len() >= FILE_HEADER_SIZE + V3_INFO_SIZE
            {
                ChannelMasks::Rgba {
                    red,
                    green,
                    blue,
                    alpha: read_at(data, MASKS_OFFSET + 12)?,
                }
            } else {
                ChannelMasks::Rgb { red, green, blue }
            };
        }
        Ok(header)
    }

    fn validate(&self) -> Result<(), BmpError> {
        if (self.size as usize) < BASE_INFO_SIZE {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "info header size {} is below {BASE_INFO_SIZE}",
                self.size
            )));
        }
        if self.width <= 0 || self.height == 0 {
            log::debug!("BMP dimensions {}x{} rejected", self.width, self.height);
            return Err(BmpError::InvalidHeader(alloc::format!(
                "invalid dimensions {}x{}",
                self.width,
                self.height
            )));
        }
        if self.width.unsigned_abs() > MAX_DIMENSION
            || self.height.unsigned_abs() > MAX_DIMENSION
        {
            log::debug!("BMP dimensions {}x{} above cap", self.width, self.height);
            return Err(BmpError::InvalidDimensions {
                width: i64::from(self.width),
                height: i64::from(self.height),
            });
        }
        BitDepth::from_bit_count(self.bit_count)?;
        Compression::from_code(self.compression)?;
        Ok(())
    }

    /// Header describing `width`x`height` top-down pixels at `depth`.
    pub fn for_encode(width: u32, height: u32, depth: BitDepth, image_size: usize) -> Self {
        let (size, compression, masks) = match depth {
            BitDepth::Rgb24 => (BASE_INFO_SIZE, Compression::Rgb, ChannelMasks::None),
            BitDepth::Rgba32 => (V3_INFO_SIZE, Compression::Bitfields, STANDARD_MASKS),
        };
        Self {
            size: size as u32,
            width: width as i32,
            height: -(height as i32),
            planes: 1,
            bit_count: depth.bit_count(),
            compression: compression.code(),
            image_size: image_size as u32,
            x_pels_per_meter: 2835, // 72 DPI
            y_pels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
            masks,
        }
    }

    /// Serialized length: base fields plus whatever mask extension is present.
    pub fn byte_len(&self) -> usize {
        if self.size as usize > BASE_INFO_SIZE {
            BASE_INFO_SIZE + self.masks.extension_len()
        } else {
            BASE_INFO_SIZE
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        self.size.put_le(out);
        self.width.put_le(out);
        self.height.put_le(out);
        self.planes.put_le(out);
        self.bit_count.put_le(out);
        self.compression.put_le(out);
        self.image_size.put_le(out);
        self.x_pels_per_meter.put_le(out);
        self.y_pels_per_meter.put_le(out);
        self.colors_used.put_le(out);
        self.colors_important.put_le(out);
        if self.size as usize > BASE_INFO_SIZE {
            let masks = self.masks.to_array();
            let count = self.masks.extension_len() / 4;
            for mask in &masks[..count] {
                mask.put_le(out);
            }
        }
    }

    pub fn top_down(&self) -> bool {
        self.height < 0
    }
}
