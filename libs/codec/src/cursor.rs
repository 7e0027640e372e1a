//! Bounded write cursor over a caller-supplied buffer.
//!
//! Every write goes through `get_mut` on the underlying slice, so writing past
//! the end is impossible; a write that does not fit leaves both the buffer and
//! the position untouched.

use crate::error::{EncodeError, EncodeResult};
use zerocopy::AsBytes;

#[derive(Debug)]
pub struct WriteCursor<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> WriteCursor<'buf> {
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Copy `bytes` at the cursor and advance past them
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> EncodeResult<()> {
        let end = self.pos + bytes.len();
        let remaining = self.remaining();
        let dst = self
            .buf
            .get_mut(self.pos..end)
            .ok_or(EncodeError::Overflow {
                needed: bytes.len(),
                remaining,
            })?;
        dst.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Write a wire struct at the cursor
    #[inline(always)]
    pub fn write_struct<T: AsBytes>(&mut self, value: &T) -> EncodeResult<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Overwrite bytes at an absolute offset without moving the cursor
    ///
    /// Only already-written bytes may be patched.
    pub fn patch_at(&mut self, offset: usize, bytes: &[u8]) -> EncodeResult<()> {
        let end = offset + bytes.len();
        if end > self.pos {
            return Err(EncodeError::Overflow {
                needed: bytes.len(),
                remaining: self.pos.saturating_sub(offset),
            });
        }
        self.buf[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Give the buffer back, trimmed to the bytes written
    pub fn into_written(self) -> &'buf mut [u8] {
        let (written, _) = self.buf.split_at_mut(self.pos);
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_writes() {
        let mut buf = [0u8; 6];
        let mut cursor = WriteCursor::new(&mut buf);

        cursor.write_bytes(&[1, 2]).unwrap();
        cursor.write_bytes(&[3, 4, 5]).unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.into_written(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_write_past_end_is_rejected_without_side_effects() {
        let mut buf = [0u8; 4];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write_bytes(&[9, 9, 9]).unwrap();

        assert_eq!(
            cursor.write_bytes(&[1, 1]),
            Err(EncodeError::Overflow { needed: 2, remaining: 1 })
        );
        assert_eq!(cursor.position(), 3);
        assert_eq!(buf, [9, 9, 9, 0]);
    }

    #[test]
    fn test_patch_only_written_bytes() {
        let mut buf = [0u8; 8];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write_bytes(&[1, 2, 3, 4]).unwrap();

        cursor.patch_at(0, &[7, 7]).unwrap();
        assert!(cursor.patch_at(3, &[5, 5]).is_err());
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.into_written(), &[7, 7, 3, 4]);
    }
}
