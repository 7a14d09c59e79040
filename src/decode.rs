use enough::Stop;

use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode configuration: input bytes plus optional resource limits.
///
/// ```
/// use bmprgba::{DecodeRequest, Image, Limits, RGBA8, Unstoppable, encode32};
///
/// let bytes = encode32(&Image::solid(4, 4, RGBA8::new(1, 2, 3, 4)).unwrap());
/// let limits = Limits { max_pixels: Some(64), ..Default::default() };
/// let image = DecodeRequest::new(&bytes).with_limits(&limits).decode(Unstoppable)?;
/// assert_eq!(image.width(), 4);
/// # Ok::<(), bmprgba::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, checking `stop` between row batches.
    pub fn decode(&self, stop: impl Stop) -> Result<Image, BmpError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}
