//! Bitfield channel extraction.

use crate::error::{BmpError, Channel};

/// A validated channel mask with its shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChannelMask {
    mask: u32,
    shift: u32,
}

impl ChannelMask {
    /// Accept `mask` only if it spans at most 8 bits once shifted down.
    ///
    /// A zero mask is accepted and extracts zero.
    pub fn new(channel: Channel, mask: u32) -> Result<Self, BmpError> {
        let shift = if mask == 0 { 0 } else { mask.trailing_zeros() };
        if mask >> shift > 0xFF {
            log::debug!("BMP {channel} mask {mask:#010x} wider than 8 bits");
            return Err(BmpError::InvalidMask { channel, mask });
        }
        Ok(Self { mask, shift })
    }

    pub fn is_zero(self) -> bool {
        self.mask == 0
    }

    #[inline]
    pub fn extract(self, word: u32) -> u8 {
        ((word & self.mask) >> self.shift).min(0xFF) as u8
    }
}

/// The four channel masks of a `BI_BITFIELDS` image, in R, G, B, A order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bitfields {
    red: ChannelMask,
    green: ChannelMask,
    blue: ChannelMask,
    alpha: ChannelMask,
}

impl Bitfields {
    pub fn new([r, g, b, a]: [u32; 4]) -> Result<Self, BmpError> {
        Ok(Self {
            red: ChannelMask::new(Channel::Red, r)?,
            green: ChannelMask::new(Channel::Green, g)?,
            blue: ChannelMask::new(Channel::Blue, b)?,
            alpha: ChannelMask::new(Channel::Alpha, a)?,
        })
    }

    /// Unpack one little-endian pixel word into R, G, B, A.
    #[inline]
    pub fn unpack(&self, word: u32) -> [u8; 4] {
        let alpha = if self.alpha.is_zero() {
            0xFF
        } else {
            self.alpha.extract(word)
        };
        [
            self.red.extract(word),
            self.green.extract(word),
            self.blue.extract(word),
            alpha,
        ]
    }
}
