//! Color types and the channel abstraction consumed by gradient blending.
//!
//! Provides RGBA colors at three precisions:
//! - `Rgba`: f64 components in [0, 1]
//! - `Rgba8`: u8 components (the output precision of every gradient)
//! - `Rgba16`: u16 components (the precision blending works in)
//!
//! Any type implementing [`Color`] can be used as a stop color. The trait
//! exposes the color's native 16-bit channels; blending interpolates those
//! values as-is, so a premultiplied color stays premultiplied and a straight
//! one stays straight.

use crate::basics::uround;

// ============================================================================
// Color trait
// ============================================================================

/// A four-channel color that can report its channels at 16-bit precision.
pub trait Color {
    /// Native 16-bit red, green, blue and alpha intensities.
    fn to_rgba16(&self) -> Rgba16;
}

impl<C: Color + ?Sized> Color for &C {
    fn to_rgba16(&self) -> Rgba16 {
        (**self).to_rgba16()
    }
}

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn premultiply(&mut self) -> &mut Self {
        self.r *= self.a;
        self.g *= self.a;
        self.b *= self.a;
        self
    }
}

impl Color for Rgba {
    fn to_rgba16(&self) -> Rgba16 {
        Rgba16::from_rgba(self)
    }
}

/// Create a pre-multiplied Rgba color.
pub fn rgba_pre(r: f64, g: f64, b: f64, a: f64) -> Rgba {
    let mut c = Rgba::new(r, g, b, a);
    c.premultiply();
    c
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    /// Channels in R, G, B, A byte order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Color for Rgba8 {
    fn to_rgba16(&self) -> Rgba16 {
        Rgba16::from_rgba8(self)
    }
}

/// Create an Rgba8 from a packed RGBA value (0xRRGGBBAA).
pub fn rgba8_packed(v: u32) -> Rgba8 {
    Rgba8::new(v >> 24, (v >> 16) & 0xFF, (v >> 8) & 0xFF, v & 0xFF)
}

// ============================================================================
// Rgba16 (16-bit per channel)
// ============================================================================

/// RGBA color with u16 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    const BASE_MASK: f64 = 65535.0;

    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u16,
            g: g as u16,
            b: b as u16,
            a: a as u16,
        }
    }

    /// Convert from Rgba (f64), rounding half up.
    pub fn from_rgba(c: &Rgba) -> Self {
        Self {
            r: uround(c.r * Self::BASE_MASK) as u16,
            g: uround(c.g * Self::BASE_MASK) as u16,
            b: uround(c.b * Self::BASE_MASK) as u16,
            a: uround(c.a * Self::BASE_MASK) as u16,
        }
    }

    /// Convert from Rgba8 (u8) by expanding 8-bit to 16-bit.
    pub fn from_rgba8(c: &Rgba8) -> Self {
        Self {
            r: ((c.r as u16) << 8) | c.r as u16,
            g: ((c.g as u16) << 8) | c.g as u16,
            b: ((c.b as u16) << 8) | c.b as u16,
            a: ((c.a as u16) << 8) | c.a as u16,
        }
    }

    /// Reduce to 8 bits per channel by dropping the low byte.
    pub fn to_rgba8(&self) -> Rgba8 {
        Rgba8 {
            r: (self.r >> 8) as u8,
            g: (self.g >> 8) as u8,
            b: (self.b >> 8) as u8,
            a: (self.a >> 8) as u8,
        }
    }
}

impl Color for Rgba16 {
    fn to_rgba16(&self) -> Rgba16 {
        *self
    }
}

// ============================================================================
// Tests
// ============================================================================
