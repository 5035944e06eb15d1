//! Clipping canvas wrapper.
//!
//! [`RendererBase`] narrows any canvas to a clip rectangle. The clip
//! rectangle becomes the wrapper's bounds, so a gradient drawn through it is
//! laid out relative to the clip box (its fractions scale by the clip box
//! size, and its origin is the clip box's minimum corner).

use crate::basics::RectI;
use crate::canvas::Canvas;
use crate::color::Rgba8;

// ============================================================================
// RendererBase
// ============================================================================

/// Canvas wrapper that clips every write to a rectangle before delegating
/// to the underlying canvas.
pub struct RendererBase<C: Canvas> {
    ren: C,
    clip_box: RectI,
}

impl<C: Canvas> RendererBase<C> {
    /// Wrap `ren`. The clip box starts at the full canvas extent.
    pub fn new(ren: C) -> Self {
        let clip_box = ren.bounds();
        Self { ren, clip_box }
    }

    /// Set the clip rectangle (half-open), intersected with the canvas
    /// bounds. Returns `false` and clips everything away if the two do not
    /// overlap.
    pub fn clip_box_i(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let mut cb = RectI::new(x1, y1, x2, y2);
        cb.normalize();
        if cb.clip(&self.ren.bounds()) && !cb.is_empty() {
            self.clip_box = cb;
            true
        } else {
            self.reset_clipping(false);
            false
        }
    }

    /// Reset clipping to the full canvas or to nothing.
    pub fn reset_clipping(&mut self, visibility: bool) {
        if visibility {
            self.clip_box = self.ren.bounds();
        } else {
            let b = self.ren.bounds();
            self.clip_box = RectI::new(b.x1, b.y1, b.x1, b.y1);
        }
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.contains(x, y)
    }

    /// Get a reference to the underlying canvas.
    pub fn ren(&self) -> &C {
        &self.ren
    }

    /// Get a mutable reference to the underlying canvas.
    pub fn ren_mut(&mut self) -> &mut C {
        &mut self.ren
    }

    /// Unwrap the underlying canvas.
    pub fn into_inner(self) -> C {
        self.ren
    }
}

impl<C: Canvas> Canvas for RendererBase<C> {
    fn bounds(&self) -> RectI {
        self.clip_box
    }

    fn set(&mut self, x: i32, y: i32, c: &Rgba8) {
        if self.inbox(x, y) {
            self.ren.set(x, y, c);
        }
    }

    fn fill_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        if y < self.clip_box.y1 || y >= self.clip_box.y2 {
            return;
        }
        let x1 = x.max(self.clip_box.x1);
        let x2 = (x + len as i32).min(self.clip_box.x2);
        if x1 < x2 {
            self.ren.fill_hspan(x1, y, (x2 - x1) as u32, c);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
