//! RGBA32 pixel format.
//!
//! Reads and writes 4-byte R, G, B, A pixels (straight alpha) through a
//! [`RowAccessor`]. Gradient writes are plain copies; no blending with the
//! existing contents takes place.

use crate::basics::RectI;
use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::error::{GradientError, Result};
use crate::rendering_buffer::RowAccessor;

const BPP: usize = 4; // bytes per pixel

// ============================================================================
// PixfmtRgba32
// ============================================================================

/// Pixel format for RGBA32 (4 bytes per pixel, R=0, G=1, B=2, A=3).
pub struct PixfmtRgba32<'a> {
    rbuf: RowAccessor<'a>,
}

impl<'a> PixfmtRgba32<'a> {
    /// Wrap a row accessor. Fails if its rows hold fewer than `width * 4`
    /// bytes.
    pub fn new(rbuf: RowAccessor<'a>) -> Result<Self> {
        let needed = rbuf.width() as usize * BPP;
        if (rbuf.stride_abs() as usize) < needed {
            return Err(GradientError::StrideTooSmall {
                width: rbuf.width(),
                needed,
                stride: rbuf.stride_abs(),
            });
        }
        Ok(Self { rbuf })
    }

    pub fn width(&self) -> u32 {
        self.rbuf.width()
    }

    pub fn height(&self) -> u32 {
        self.rbuf.height()
    }

    /// Release the underlying row accessor.
    pub fn into_inner(self) -> RowAccessor<'a> {
        self.rbuf
    }

    /// Get the pixel color at (x, y).
    pub fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        Rgba8::new(
            row[off] as u32,
            row[off + 1] as u32,
            row[off + 2] as u32,
            row[off + 3] as u32,
        )
    }

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &Rgba8) {
        let w = self.width();
        for y in 0..self.height() as i32 {
            self.copy_hline(0, y, w, c);
        }
    }

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        for p in row[start..end].chunks_exact_mut(BPP) {
            p.copy_from_slice(&c.to_array());
        }
    }
}

impl<'a> Canvas for PixfmtRgba32<'a> {
    fn bounds(&self) -> RectI {
        RectI::new(0, 0, self.width() as i32, self.height() as i32)
    }

    fn set(&mut self, x: i32, y: i32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let off = x as usize * BPP;
        row[off..off + BPP].copy_from_slice(&c.to_array());
    }

    fn fill_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        self.copy_hline(x, y, len, c);
    }
}

// ============================================================================
// Tests
// ============================================================================
