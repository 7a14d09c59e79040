//! Premultiplied-alpha boundary transforms.
//!
//! BMP data is straight alpha. Platform image types often want premultiplied
//! RGBA; these helpers convert at that boundary. Both directions truncate.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::image::Image;

/// Scale each color channel by `alpha / 255`, truncating.
pub fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        for c in &mut px[..3] {
            *c = (u32::from(*c) * a / 255) as u8;
        }
    }
}

/// Divide each color channel by `alpha / 255`, truncating and clamping to 255.
///
/// Fully transparent pixels get zero color.
pub fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        for c in &mut px[..3] {
            *c = if a == 0 {
                0
            } else {
                (u32::from(*c) * 255 / a).min(255) as u8
            };
        }
    }
}

impl Image {
    /// Build an image from premultiplied RGBA, converting to straight alpha.
    pub fn from_premultiplied(
        width: u32,
        height: u32,
        mut rgba: Vec<u8>,
    ) -> Result<Self, BmpError> {
        unpremultiply_in_place(&mut rgba);
        Image::new(width, height, rgba)
    }

    /// Copy of the pixel buffer with color channels premultiplied by alpha.
    pub fn to_premultiplied(&self) -> Vec<u8> {
        let mut rgba = self.rgba().to_vec();
        premultiply_in_place(&mut rgba);
        rgba
    }
}
