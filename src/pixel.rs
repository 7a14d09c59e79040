use crate::error::BmpError;

/// On-disk bits per pixel supported by this codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 24-bit B,G,R with rows padded to 4 bytes. No alpha.
    Rgb24,
    /// 32-bit B,G,R,A (or bitfields), no row padding.
    Rgba32,
}

impl BitDepth {
    /// Map a `biBitCount` value, rejecting anything but 24 and 32.
    pub fn from_bit_count(bits: u16) -> Result<Self, BmpError> {
        match bits {
            24 => Ok(Self::Rgb24),
            32 => Ok(Self::Rgba32),
            other => Err(BmpError::UnsupportedVariant(alloc::format!(
                "BMP bit depth {other} unsupported"
            ))),
        }
    }

    pub fn bit_count(self) -> u16 {
        match self {
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
        }
    }

    /// Bytes per on-disk pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Rgba32 => 4,
        }
    }

    /// On-disk row length in bytes, including padding.
    pub fn row_stride(self, width: usize) -> usize {
        match self {
            Self::Rgb24 => (width * 3).div_ceil(4) * 4,
            Self::Rgba32 => width * 4,
        }
    }
}

/// Compression codes accepted in the info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `BI_RGB`: fixed channel order.
    Rgb,
    /// `BI_BITFIELDS`: channel positions come from explicit masks.
    Bitfields,
}

impl Compression {
    pub const BI_RGB: u32 = 0;
    pub const BI_BITFIELDS: u32 = 3;

    pub fn from_code(code: u32) -> Result<Self, BmpError> {
        match code {
            Self::BI_RGB => Ok(Self::Rgb),
            Self::BI_BITFIELDS => Ok(Self::Bitfields),
            other => Err(BmpError::UnsupportedVariant(alloc::format!(
                "unsupported BMP compression scheme {other}"
            ))),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::Rgb => Self::BI_RGB,
            Self::Bitfields => Self::BI_BITFIELDS,
        }
    }
}
