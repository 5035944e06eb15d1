//! The pixel sink gradients are drawn into.
//!
//! A [`Canvas`] exposes its addressable region and a way to overwrite one
//! pixel. Rasterizers never read pixels and never write outside `bounds()`;
//! bounds checking beyond that is the canvas's own business.

use crate::basics::RectI;
use crate::color::Rgba8;

/// Something a gradient can be drawn into.
pub trait Canvas {
    /// Addressable region, half-open (`x1..x2`, `y1..y2`). The minimum
    /// corner may be non-zero.
    fn bounds(&self) -> RectI;

    /// Overwrite the pixel at `(x, y)` with `c`. Coordinates are in the
    /// canvas's own space.
    fn set(&mut self, x: i32, y: i32, c: &Rgba8);

    /// Overwrite `len` pixels starting at `(x, y)` and running right.
    fn fill_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        for i in 0..len as i32 {
            self.set(x + i, y, c);
        }
    }
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn bounds(&self) -> RectI {
        (**self).bounds()
    }

    fn set(&mut self, x: i32, y: i32, c: &Rgba8) {
        (**self).set(x, y, c)
    }

    fn fill_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        (**self).fill_hspan(x, y, len, c)
    }
}

#[cfg(feature = "image")]
impl Canvas for image::RgbaImage {
    fn bounds(&self) -> RectI {
        RectI::new(0, 0, self.width() as i32, self.height() as i32)
    }

    fn set(&mut self, x: i32, y: i32, c: &Rgba8) {
        self.put_pixel(x as u32, y as u32, image::Rgba(c.to_array()));
    }
}
