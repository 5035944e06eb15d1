//! Foundation types shared by the color, canvas and gradient layers.
//!
//! Rounding helpers, the integer rectangle used for canvas bounds, and a
//! small 2D point type used by the gradient geometry.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
///
/// When used as canvas bounds the rectangle is half-open: pixels with
/// `x1 <= x < x2` and `y1 <= y < y2` are addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result still has both corners in order.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

impl Rect<i32> {
    /// Horizontal extent, `x2 - x1`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Vertical extent, `y2 - y1`.
    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Returns `true` if the half-open rectangle covers no pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }

    /// Returns `true` if pixel `(x, y)` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

impl PointD {
    /// Euclidean length of the vector from the origin to this point.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Scale the vector so its length becomes `len`, keeping its direction.
    /// A zero vector stays zero.
    pub fn with_length(&self, len: f64) -> PointD {
        let cur = self.length();
        if cur == 0.0 {
            return *self;
        }
        let k = len / cur;
        PointD::new(self.x * k, self.y * k)
    }
}

// ============================================================================
// Tests
// ============================================================================
