//! This module defines the `ByteCursor` type, a sequential
//! endianness-aware reader over an in-memory byte buffer. All header
//! field decoding in this crate goes through it.

use crate::error::{NiftiError, Result};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;

/// A position-tracking reader over a borrowed byte buffer.
///
/// Every multi-byte read honors the byte order chosen at construction;
/// there is no host-order default. The offset only moves forward, by
/// exactly the number of bytes consumed, and a read that would pass the
/// end of the buffer fails with [`NiftiError::Truncated`] without
/// advancing.
///
/// A cursor is meant for a single decode pass. To reuse one over the
/// same buffer, call [`rewind`](ByteCursor::rewind) first.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    endianness: Endianness,
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor at offset 0 with the given byte order.
    pub fn new(data: &'a [u8], endianness: Endianness) -> Self {
        ByteCursor {
            data,
            endianness,
            offset: 0,
        }
    }

    /// Reset the read offset to the start of the buffer.
    pub fn rewind(&mut self) {
        self.offset = 0;
    }

    /// The current read offset in bytes.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Consume the next `count` bytes, returning them as a slice.
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        match self.data.get(self.offset..self.offset + count) {
            Some(bytes) => {
                self.offset += count;
                Ok(bytes)
            }
            None => Err(NiftiError::Truncated(self.offset, count, self.data.len())),
        }
    }

    /// Read a single unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Read a 16-bit signed integer with this cursor's byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.take(2)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_i16(bytes),
            Endianness::Big => BigEndian::read_i16(bytes),
        })
    }

    /// Read a 16-bit unsigned integer with this cursor's byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_u16(bytes),
            Endianness::Big => BigEndian::read_u16(bytes),
        })
    }

    /// Read a 32-bit signed integer with this cursor's byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_i32(bytes),
            Endianness::Big => BigEndian::read_i32(bytes),
        })
    }

    /// Read a 32-bit unsigned integer with this cursor's byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_u32(bytes),
            Endianness::Big => BigEndian::read_u32(bytes),
        })
    }

    /// Read a 32-bit IEEE 754 float with this cursor's byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.take(4)?;
        Ok(match self.endianness {
            Endianness::Little => LittleEndian::read_f32(bytes),
            Endianness::Big => BigEndian::read_f32(bytes),
        })
    }

    /// Fill `dst` with consecutive 16-bit signed integers.
    pub fn read_i16_into(&mut self, dst: &mut [i16]) -> Result<()> {
        let bytes = self.take(dst.len() * 2)?;
        match self.endianness {
            Endianness::Little => LittleEndian::read_i16_into(bytes, dst),
            Endianness::Big => BigEndian::read_i16_into(bytes, dst),
        }
        Ok(())
    }

    /// Fill `dst` with consecutive 32-bit floats.
    pub fn read_f32_into(&mut self, dst: &mut [f32]) -> Result<()> {
        let bytes = self.take(dst.len() * 4)?;
        match self.endianness {
            Endianness::Little => LittleEndian::read_f32_into(bytes, dst),
            Endianness::Big => BigEndian::read_f32_into(bytes, dst),
        }
        Ok(())
    }

    /// Read `len` raw bytes as a fixed-width text field.
    ///
    /// The bytes are decoded as Latin-1 and trailing NUL padding is
    /// trimmed, so a fully zeroed field comes out as an empty string.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        let bytes = self.take(len)?;
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(bytes[..end].iter().map(|&b| b as char).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use crate::error::NiftiError;
    use byteordered::Endianness;

    #[test]
    fn typed_reads_le() {
        let data = [0x5C, 0x01, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F, 0x2A];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_i32().unwrap(), 348);
        assert_eq!(cursor.read_f32().unwrap(), 1.);
        assert_eq!(cursor.read_u8().unwrap(), 42);
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn typed_reads_be() {
        let data = [0x00, 0x00, 0x01, 0x5C, 0x3F, 0x80, 0x00, 0x00, 0x2A];
        let mut cursor = ByteCursor::new(&data, Endianness::Big);
        assert_eq!(cursor.read_i32().unwrap(), 348);
        assert_eq!(cursor.read_f32().unwrap(), 1.);
        assert_eq!(cursor.read_u8().unwrap(), 42);
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn reads_16_bit() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_i16().unwrap(), -1);
        assert_eq!(cursor.read_u16().unwrap(), 0xFFFF);
    }

    #[test]
    fn array_reads() {
        let data = [0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        let mut dim = [0i16; 3];
        cursor.read_i16_into(&mut dim).unwrap();
        assert_eq!(dim, [1, 2, 3]);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn string_trims_trailing_nul() {
        let data = *b"FSL3.2beta\0\0\0\0\0\0";
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_string(16).unwrap(), "FSL3.2beta");
        assert_eq!(cursor.position(), 16);
    }

    #[test]
    fn string_keeps_interior_nul() {
        let data = [b'a', 0, b'b', 0];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_string(4).unwrap(), "a\0b");
    }

    #[test]
    fn string_all_zero_is_empty() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data, Endianness::Big);
        assert_eq!(cursor.read_string(8).unwrap(), "");
    }

    #[test]
    fn rewind_restarts_the_pass() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data, Endianness::Big);
        assert_eq!(cursor.read_u16().unwrap(), 0x0102);
        cursor.rewind();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn truncated_read_fails() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_u16().unwrap(), 0x0201);
        let e = cursor.read_u16().unwrap_err();
        assert_eq!(e, NiftiError::Truncated(2, 2, 3));
    }
}
