//! SaveBuffer implementation
//!
//! Raw offset/width reads and writes. Widths outside {1, 2, 4} and accesses
//! past the end fail before any byte is touched.

use bytes::{Buf, BufMut};

use super::Width;
use crate::error::{Result, SaveError};

/// Fixed-length, mutable save bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBuffer {
    data: Vec<u8>,
}

impl SaveBuffer {
    /// Wrap raw bytes. The length is fixed from here on.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Read an unsigned little-endian integer of `width` bytes at `offset`
    pub fn get(&self, offset: usize, width: usize) -> Result<u32> {
        let width = Width::try_from(width)?;
        self.get_width(offset, width)
    }

    /// Write `value` as `width` little-endian bytes at `offset`
    ///
    /// The value is stored modulo 2^(8 * width).
    pub fn set(&mut self, offset: usize, width: usize, value: u64) -> Result<()> {
        let width = Width::try_from(width)?;
        self.set_width(offset, width, value)
    }

    pub(crate) fn get_width(&self, offset: usize, width: Width) -> Result<u32> {
        let mut src = &self.data[self.span(offset, width)?];
        // width <= 4, so the value always fits
        Ok(src.get_uint_le(width.bytes()) as u32)
    }

    pub(crate) fn set_width(&mut self, offset: usize, width: Width, value: u64) -> Result<()> {
        let range = self.span(offset, width)?;
        let mut dst = &mut self.data[range];
        // put_uint_le keeps the low `width` bytes, which is the wraparound we want
        dst.put_uint_le(value, width.bytes());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Typed helpers
    // -------------------------------------------------------------------------

    pub fn get_u8(&self, offset: usize) -> Result<u8> {
        self.get_width(offset, Width::One).map(|v| v as u8)
    }

    pub fn get_u16(&self, offset: usize) -> Result<u16> {
        self.get_width(offset, Width::Two).map(|v| v as u16)
    }

    pub fn get_u32(&self, offset: usize) -> Result<u32> {
        self.get_width(offset, Width::Four)
    }

    pub fn set_u8(&mut self, offset: usize, value: u8) -> Result<()> {
        self.set_width(offset, Width::One, value.into())
    }

    pub fn set_u16(&mut self, offset: usize, value: u16) -> Result<()> {
        self.set_width(offset, Width::Two, value.into())
    }

    pub fn set_u32(&mut self, offset: usize, value: u32) -> Result<()> {
        self.set_width(offset, Width::Four, value.into())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current contents, verbatim
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up the buffer and return its bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Byte range covered by an access, or OutOfRange
    fn span(&self, offset: usize, width: Width) -> Result<std::ops::Range<usize>> {
        let len = self.data.len();
        match offset.checked_add(width.bytes()) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(SaveError::OutOfRange {
                offset,
                width: width.bytes(),
                len,
            }),
        }
    }
}

impl From<Vec<u8>> for SaveBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for SaveBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
