//! 14-byte `BITMAPFILEHEADER`.

use alloc::vec::Vec;

use super::info_header::BASE_INFO_SIZE;
use crate::bytes::{LeInt, read_at};
use crate::error::BmpError;

pub(crate) const FILE_HEADER_SIZE: usize = 14;

/// `"BM"` read as a little-endian `u16`.
pub(crate) const SIGNATURE: u16 = 0x4D42;

/// Smallest pixel offset a file can declare: file header plus base info header.
pub(crate) const MIN_PIXEL_OFFSET: u32 = (FILE_HEADER_SIZE + BASE_INFO_SIZE) as u32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Parse and validate the file header at the start of `data`.
    ///
    /// The pixel offset must point strictly inside `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        let header = Self {
            signature: read_at(data, 0)?,
            file_size: read_at(data, 2)?,
            reserved1: read_at(data, 6)?,
            reserved2: read_at(data, 8)?,
            pixel_offset: read_at(data, 10)?,
        };

        if header.signature != SIGNATURE {
            return Err(BmpError::UnrecognizedFormat);
        }
        if header.pixel_offset < MIN_PIXEL_OFFSET {
            log::debug!("BMP pixel offset {} below minimum", header.pixel_offset);
            return Err(BmpError::InvalidHeader(alloc::format!(
                "pixel data offset {} is below the minimum {MIN_PIXEL_OFFSET}",
                header.pixel_offset
            )));
        }
        if header.pixel_offset as usize >= data.len() {
            log::debug!(
                "BMP pixel offset {} outside {}-byte input",
                header.pixel_offset,
                data.len()
            );
            return Err(BmpError::InvalidHeader(alloc::format!(
                "pixel data offset {} is outside the {}-byte input",
                header.pixel_offset,
                data.len()
            )));
        }
        Ok(header)
    }

    /// Header for an encoded file with `info_size` bytes of info header
    /// followed by `pixel_bytes` of pixel data.
    pub fn for_encode(pixel_bytes: usize, info_size: u32) -> Self {
        let pixel_offset = FILE_HEADER_SIZE as u32 + info_size;
        Self {
            signature: SIGNATURE,
            file_size: pixel_offset + pixel_bytes as u32,
            reserved1: 0,
            reserved2: 0,
            pixel_offset,
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        self.signature.put_le(out);
        self.file_size.put_le(out);
        self.reserved1.put_le(out);
        self.reserved2.put_le(out);
        self.pixel_offset.put_le(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn header_bytes(offset: u32, total: usize) -> Vec<u8> {
        let mut data = vec![0u8; total];
        data[0] = b'B';
        data[1] = b'M';
        data[2..6].copy_from_slice(&(total as u32).to_le_bytes());
        data[6..8].copy_from_slice(&7u16.to_le_bytes());
        data[8..10].copy_from_slice(&9u16.to_le_bytes());
        data[10..14].copy_from_slice(&offset.to_le_bytes());
        data
    }

    #[test]
    fn parse_valid() {
        let data = header_bytes(54, 58);
        let h = FileHeader::parse(&data).unwrap();
        assert_eq!(h.file_size, 58);
        assert_eq!((h.reserved1, h.reserved2), (7, 9));
        assert_eq!(h.pixel_offset, 54);
    }

    #[test]
    fn rejects_short_and_bad_magic() {
        assert!(matches!(
            FileHeader::parse(b"BM\0\0"),
            Err(BmpError::UnexpectedEof)
        ));
        let mut data = header_bytes(54, 58);
        data[1] = b'A';
        assert!(matches!(
            FileHeader::parse(&data),
            Err(BmpError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn offset_bounds() {
        assert!(FileHeader::parse(&header_bytes(53, 58)).is_err());
        assert!(FileHeader::parse(&header_bytes(58, 58)).is_err());
        assert!(FileHeader::parse(&header_bytes(57, 58)).is_ok());
    }

    #[test]
    fn encode_roundtrip() {
        let h = FileHeader::for_encode(4, 40);
        assert_eq!(h.file_size, 58);
        assert_eq!(h.pixel_offset, 54);
        let mut out = Vec::new();
        h.write(&mut out);
        assert_eq!(out.len(), FILE_HEADER_SIZE);
        assert_eq!(&out[0..2], b"BM");
        out.extend_from_slice(&[0u8; 44]);
        assert_eq!(FileHeader::parse(&out).unwrap(), h);
    }
}
