//! # bmprgba
//!
//! Strict decoder and encoder for uncompressed 24-bit and 32-bit Windows BMP,
//! converting to and from a top-down RGBA8 [`Image`].
//!
//! Decoding is safe on arbitrary untrusted input: every offset derived from a
//! header is bounds-checked, and failure is always an [`BmpError`], never a
//! panic or a partial image.
//!
//! ## Supported Formats
//!
//! - `BITMAPINFOHEADER` (40 bytes) and the V2/V3 extensions carrying channel masks
//! - 24-bit BGR (`BI_RGB`), rows padded to 4 bytes
//! - 32-bit BGRA (`BI_RGB`, alpha forced opaque) and `BI_BITFIELDS` with masks
//!   at most 8 bits wide
//! - Bottom-up and top-down row order
//! - Width and height up to [`MAX_DIMENSION`]
//!
//! ## Non-Goals
//!
//! - RLE compression, palettes, bit depths other than 24/32
//! - ICC profiles and color management
//! - Resizing or conversion to other formats
//!
//! ## Usage
//!
//! ```
//! use bmprgba::{Image, Point, RGBA8, decode, encode24, encode32};
//!
//! let img = Image::linear_gradient(
//!     16, 8,
//!     RGBA8::new(255, 0, 0, 255),
//!     RGBA8::new(0, 0, 255, 255),
//!     Point::new(0.0, 0.0),
//!     Point::new(15.0, 0.0),
//! )?;
//!
//! let bytes = encode32(&img);
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded.rgba(), img.rgba());
//!
//! let rgb_only = decode(&encode24(&img))?;
//! assert_eq!(rgb_only.width(), 16);
//! # Ok::<(), bmprgba::BmpError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bytes;
mod error;
mod image;
mod limits;
mod pixel;
mod premultiply;

mod bmp;

mod decode;

use alloc::vec::Vec;

// Re-exports
pub use bmp::{BmpInfo, ChannelMasks};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{BmpError, Channel};
pub use image::{Image, Point};
pub use limits::{Limits, MAX_DIMENSION};
pub use pixel::{BitDepth, Compression};
pub use premultiply::{premultiply_in_place, unpremultiply_in_place};
pub use rgb::RGBA8;

/// Decode a BMP file into a top-down RGBA image.
pub fn decode(data: &[u8]) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode(Unstoppable)
}

/// Parse and validate the headers without decoding pixel data.
pub fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    bmp::probe(data)
}

/// Encode as a 24-bit top-down BMP. Alpha is dropped.
pub fn encode24(image: &Image) -> Vec<u8> {
    encode(image, BitDepth::Rgb24)
}

/// Encode as a 32-bit top-down `BI_BITFIELDS` BMP with standard masks.
pub fn encode32(image: &Image) -> Vec<u8> {
    encode(image, BitDepth::Rgba32)
}

/// Encode at the given bit depth.
pub fn encode(image: &Image, depth: BitDepth) -> Vec<u8> {
    bmp::encode(image, depth)
}
