//! Little-endian integer codec over byte slices.
//!
//! Decoding requires the slice length to match the integer width exactly;
//! anything else yields `None`.

use crate::error::BmpError;

/// Fixed-width integer with a little-endian byte representation.
pub(crate) trait LeInt: Sized + Copy {
    const WIDTH: usize;

    /// Decode from a slice of exactly [`Self::WIDTH`] bytes.
    fn from_le_slice(bytes: &[u8]) -> Option<Self>;

    /// Append the little-endian bytes to `out`.
    fn put_le(self, out: &mut alloc::vec::Vec<u8>);
}

macro_rules! impl_le_int {
    ($($t:ty),*) => {$(
        impl LeInt for $t {
            const WIDTH: usize = core::mem::size_of::<$t>();

            fn from_le_slice(bytes: &[u8]) -> Option<Self> {
                let arr: [u8; core::mem::size_of::<$t>()] = bytes.try_into().ok()?;
                Some(<$t>::from_le_bytes(arr))
            }

            fn put_le(self, out: &mut alloc::vec::Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }
        }
    )*};
}

impl_le_int!(u16, u32, i32);

/// Read a `T` at `offset`, failing with `UnexpectedEof` if it runs past the end.
pub(crate) fn read_at<T: LeInt>(data: &[u8], offset: usize) -> Result<T, BmpError> {
    let end = offset
        .checked_add(T::WIDTH)
        .ok_or(BmpError::UnexpectedEof)?;
    let bytes = data.get(offset..end).ok_or(BmpError::UnexpectedEof)?;
    T::from_le_slice(bytes).ok_or(BmpError::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn exact_width_required() {
        assert_eq!(u16::from_le_slice(&[0x42, 0x4D]), Some(0x4D42));
        assert_eq!(u16::from_le_slice(&[0x42]), None);
        assert_eq!(u32::from_le_slice(&[1, 0, 0]), None);
        assert_eq!(u32::from_le_slice(&[1, 0, 0, 0, 0]), None);
        assert_eq!(i32::from_le_slice(&[0xFF, 0xFF, 0xFF, 0xFF]), Some(-1));
    }

    #[test]
    fn put_le_is_little_endian() {
        let mut out = Vec::new();
        0x1234_5678u32.put_le(&mut out);
        (-2i32).put_le(&mut out);
        0xBEEFu16.put_le(&mut out);
        assert_eq!(
            out,
            [0x78, 0x56, 0x34, 0x12, 0xFE, 0xFF, 0xFF, 0xFF, 0xEF, 0xBE]
        );
    }

    #[test]
    fn read_at_bounds() {
        let data = [0u8, 1, 2, 3, 4];
        assert_eq!(read_at::<u32>(&data, 1).unwrap(), 0x0403_0201);
        assert!(matches!(
            read_at::<u32>(&data, 2),
            Err(BmpError::UnexpectedEof)
        ));
        assert!(matches!(
            read_at::<u16>(&data, usize::MAX),
            Err(BmpError::UnexpectedEof)
        ));
    }
}
