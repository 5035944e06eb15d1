//! Helpers shared by the rasterizer unit tests.

use crate::basics::RectI;
use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::pixfmt_rgba::PixfmtRgba32;
use crate::rendering_buffer::RowAccessor;

/// Render into a fresh `w`×`h` RGBA buffer pre-filled with `fill`.
pub(crate) fn render_filled<F>(w: u32, h: u32, fill: u8, f: F) -> Vec<u8>
where
    F: FnOnce(&mut PixfmtRgba32<'_>),
{
    let mut buf = vec![fill; (w * h * 4) as usize];
    {
        let ra = RowAccessor::new(&mut buf, w, h, (w * 4) as i32).unwrap();
        let mut pf = PixfmtRgba32::new(ra).unwrap();
        f(&mut pf);
    }
    buf
}

/// Render into a fresh zeroed `w`×`h` RGBA buffer.
pub(crate) fn render<F>(w: u32, h: u32, f: F) -> Vec<u8>
where
    F: FnOnce(&mut PixfmtRgba32<'_>),
{
    render_filled(w, h, 0, f)
}

/// Read pixel `(x, y)` from a tightly packed RGBA buffer of width `w`.
pub(crate) fn px(buf: &[u8], w: u32, x: u32, y: u32) -> Rgba8 {
    let i = ((y * w + x) * 4) as usize;
    Rgba8::new(
        buf[i] as u32,
        buf[i + 1] as u32,
        buf[i + 2] as u32,
        buf[i + 3] as u32,
    )
}

/// Canvas that only counts how often each pixel is written.
pub(crate) struct WriteCounter {
    pub bounds: RectI,
    pub counts: Vec<u32>,
}

impl WriteCounter {
    pub fn new(bounds: RectI) -> Self {
        let n = (bounds.width().max(0) * bounds.height().max(0)) as usize;
        Self {
            bounds,
            counts: vec![0; n],
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn all_exactly_once(&self) -> bool {
        self.counts.iter().all(|&n| n == 1)
    }
}

impl Canvas for WriteCounter {
    fn bounds(&self) -> RectI {
        self.bounds
    }

    fn set(&mut self, x: i32, y: i32, _c: &Rgba8) {
        assert!(
            self.bounds.contains(x, y),
            "write at ({}, {}) outside {:?}",
            x,
            y,
            self.bounds
        );
        let w = self.bounds.width();
        let i = ((y - self.bounds.y1) * w + (x - self.bounds.x1)) as usize;
        self.counts[i] += 1;
    }
}
