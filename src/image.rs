use alloc::vec::Vec;

use rgb::RGBA8;

use crate::error::BmpError;
use crate::limits::check_dimensions;

/// A point in pixel space, used to define a gradient axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An immutable RGBA8 image, rows stored top-down with no padding.
///
/// `rgba().len() == width * height * 4` always holds, and both dimensions are
/// in `1..=MAX_DIMENSION`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Image {
    /// Wrap an existing RGBA buffer.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, BmpError> {
        let (width, height) = check_dimensions(i64::from(width), i64::from(height))?;
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(BmpError::BufferSizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Every pixel set to `color`.
    pub fn solid(width: u32, height: u32, color: RGBA8) -> Result<Self, BmpError> {
        let (width, height) = check_dimensions(i64::from(width), i64::from(height))?;
        let count = width as usize * height as usize;
        let mut rgba = Vec::with_capacity(count * 4);
        for _ in 0..count {
            rgba.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Linear gradient from `start_color` at `start` to `end_color` at `end`.
    ///
    /// Each pixel `(x, y)` is projected onto the axis and the parameter is
    /// clamped to `[0, 1]`. A zero-length or non-finite axis paints everything
    /// `start_color`.
    /// Interpolated channels are truncated, not rounded.
    pub fn linear_gradient(
        width: u32,
        height: u32,
        start_color: RGBA8,
        end_color: RGBA8,
        start: Point,
        end: Point,
    ) -> Result<Self, BmpError> {
        let (width, height) = check_dimensions(i64::from(width), i64::from(height))?;
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let len_sq = dx * dx + dy * dy;

        let from = [start_color.r, start_color.g, start_color.b, start_color.a];
        let to = [end_color.r, end_color.g, end_color.b, end_color.a];

        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    ((f64::from(x) - start.x) * dx + (f64::from(y) - start.y) * dy) / len_sq
                };
                let t = if t.is_finite() {
                    t.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                for (&a, &b) in from.iter().zip(&to) {
                    let v = f64::from(a) * (1.0 - t) + f64::from(b) * t;
                    rgba.push(v as u8);
                }
            }
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, top-down.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(off..off + 4)?;
        Some(RGBA8::new(px[0], px[1], px[2], px[3]))
    }

    /// Reinterpret the buffer as typed pixels.
    #[cfg(feature = "typed")]
    pub fn as_pixels(&self) -> &[RGBA8] {
        use rgb::AsPixels as _;
        self.rgba[..].as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Copy into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}
