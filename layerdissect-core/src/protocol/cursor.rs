//! Forward-only byte reader used by every dissector.

use crate::error::ProtocolError;

/// Sequential reader over a borrowed byte buffer.
///
/// Reads hand out sub-slices of the original buffer, so decoded raw fields
/// stay zero-copy. A read that cannot be satisfied returns
/// [`ProtocolError::TruncatedInput`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<'data> {
    buffer: &'data [u8],
    position: usize,
}

impl<'data> ByteCursor<'data> {
    /// Create a cursor positioned at the start of `buffer`.
    pub fn new(buffer: &'data [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current offset from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// True when every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail, without advancing.
    #[inline]
    pub fn rest(&self) -> &'data [u8] {
        &self.buffer[self.position..]
    }

    /// Read the next `n` bytes and advance past them.
    pub fn read(&mut self, n: usize) -> Result<&'data [u8], ProtocolError> {
        let have = self.remaining();
        if n > have {
            return Err(ProtocolError::TruncatedInput {
                protocol: "cursor",
                field: "bytes",
                needed: n,
                have,
            });
        }

        let start = self.position;
        self.position += n;
        Ok(&self.buffer[start..self.position])
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ProtocolError> {
        let bytes = self.read(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read an unsigned big-endian integer of `n` bytes.
    ///
    /// `n` must be 1, 2, 4 or 8.
    pub fn read_uint(&mut self, n: usize) -> Result<u64, ProtocolError> {
        if !matches!(n, 1 | 2 | 4 | 8) {
            return Err(ProtocolError::InvalidWidth { width: n });
        }

        let bytes = self.read(n)?;
        Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a big-endian `u16`.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian `u32`.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, ProtocolError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read `n` bytes and return a new cursor over exactly those bytes.
    ///
    /// Used for fixed-width regions that get reinterpreted: the outer cursor
    /// always advances by `n`, whatever the inner decode consumes.
    pub fn sub_cursor(&mut self, n: usize) -> Result<ByteCursor<'data>, ProtocolError> {
        self.read(n).map(ByteCursor::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances_position() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.rest(), &[3, 4, 5]);
    }

    #[test]
    fn test_read_zero_bytes() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.read(0).unwrap(), &[] as &[u8]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_truncated_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.read(1).unwrap();

        let err = cursor.read(4).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedInput {
                protocol: "cursor",
                field: "bytes",
                needed: 4,
                have: 2,
            }
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_read_uint_big_endian() {
        let data = [
            0x02, // 1 byte
            0x00, 0x2c, // 2 bytes
            0xde, 0xad, 0xbe, 0xef, // 4 bytes
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, // 8 bytes
        ];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_uint(1).unwrap(), 2);
        assert_eq!(cursor.read_uint(2).unwrap(), 44);
        assert_eq!(cursor.read_uint(4).unwrap(), 0xdeadbeef);
        assert_eq!(cursor.read_uint(8).unwrap(), 256);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_uint_rejects_odd_width() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            cursor.read_uint(3),
            Err(ProtocolError::InvalidWidth { width: 3 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_uint_truncated() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);

        let err = cursor.read_uint(4).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn test_typed_reads() {
        let data = [0x01, 0x12, 0x34, 0x00, 0x00, 0x00, 0x2a];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 42);
    }

    #[test]
    fn test_sub_cursor_consumes_full_width() {
        let data = [0xaa, 0xbb, 0xcc, 0xdd, 0xee];
        let mut cursor = ByteCursor::new(&data);

        let mut inner = cursor.sub_cursor(4).unwrap();
        assert_eq!(cursor.position(), 4);

        assert_eq!(inner.read_u8().unwrap(), 0xaa);
        assert_eq!(inner.remaining(), 3);
        assert!(inner.read(4).is_err());
        assert_eq!(cursor.rest(), &[0xee]);
    }
}
