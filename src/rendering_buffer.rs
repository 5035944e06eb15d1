//! Rendering buffer: row-oriented access to a caller-owned pixel buffer.
//!
//! [`RowAccessor`] borrows a byte slice and computes row offsets on demand
//! as `y * stride`. Positive strides address rows top-down; negative strides
//! address them bottom-up (row 0 is the last row in memory, as in BMP).
//! The accessor never allocates or resizes the slice it borrows.

use crate::error::{GradientError, Result};

// ============================================================================
// RowAccessor
// ============================================================================

/// Row accessor over a borrowed byte buffer.
pub struct RowAccessor<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    stride: i32,
}

impl<'a> RowAccessor<'a> {
    /// Attach to `buf`, which must hold at least `height * |stride|` bytes.
    pub fn new(buf: &'a mut [u8], width: u32, height: u32, stride: i32) -> Result<Self> {
        let needed = height as usize * stride.unsigned_abs() as usize;
        if buf.len() < needed {
            return Err(GradientError::BufferTooSmall {
                needed,
                actual: buf.len(),
            });
        }
        Ok(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn stride_abs(&self) -> u32 {
        self.stride.unsigned_abs()
    }

    /// Byte offset of the first byte of row `y`.
    #[inline]
    fn row_offset(&self, y: u32) -> usize {
        let stride = self.stride_abs() as usize;
        if self.stride < 0 {
            (self.height - 1 - y) as usize * stride
        } else {
            y as usize * stride
        }
    }

    /// Immutable slice for row `y`, `stride_abs()` bytes long.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let off = self.row_offset(y);
        &self.buf[off..off + self.stride_abs() as usize]
    }

    /// Mutable slice for row `y`, `stride_abs()` bytes long.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let off = self.row_offset(y);
        let len = self.stride_abs() as usize;
        &mut self.buf[off..off + len]
    }

    /// Fill every byte of every row with `value`.
    pub fn clear(&mut self, value: u8) {
        for y in 0..self.height {
            self.row_slice_mut(y).fill(value);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
