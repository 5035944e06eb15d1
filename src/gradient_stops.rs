//! Gradient color stops and stop-position resolution.
//!
//! A gradient ramp is an ordered slice of [`Stop`]s, the SVG `<stop>` model:
//! each stop pins a color at a position along the gradient axis or radius.
//! [`StopTable`] resolves a scalar gradient position to an output color and
//! is the single resolution routine every rasterizer goes through, so all
//! paths share the same quantization.

use crate::color::{Color, Rgba8};

// ============================================================================
// ColorBlend
// ============================================================================

/// Interpolate one 16-bit channel and reduce it to 8 bits.
///
/// The blended value is truncated toward zero and shifted, not rounded.
#[inline]
fn lerp_channel(a: u16, b: u16, x: f64) -> u8 {
    ((a as f64 * (1.0 - x) + b as f64 * x) as i32 >> 8) as u8
}

/// Blend two colors at ratio `x`, channel by channel, in their native
/// 16-bit representation.
///
/// `x` is not clamped: values outside [0, 1] extrapolate.
pub fn blend<C: Color>(c0: &C, c1: &C, x: f64) -> Rgba8 {
    let a = c0.to_rgba16();
    let b = c1.to_rgba16();
    Rgba8 {
        r: lerp_channel(a.r, b.r, x),
        g: lerp_channel(a.g, b.g, x),
        b: lerp_channel(a.b, b.b, x),
        a: lerp_channel(a.a, b.a, x),
    }
}

// ============================================================================
// Stop
// ============================================================================

/// A gradient control point: `color` at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop<C = Rgba8> {
    /// Normally in [0, 1]; values outside the range are accepted.
    pub position: f64,
    pub color: C,
}

impl<C> Stop<C> {
    pub fn new(position: f64, color: C) -> Self {
        Self { position, color }
    }
}

impl<C> From<(f64, C)> for Stop<C> {
    fn from((position, color): (f64, C)) -> Self {
        Self { position, color }
    }
}

// ============================================================================
// StopTable
// ============================================================================

/// Where a gradient position falls relative to the stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// At or before the start of the ramp.
    First,
    /// Inside segment `index` (between stop `index` and `index + 1`),
    /// at local ratio `t`.
    Segment { index: usize, t: f64 },
    /// At or after the last stop.
    Last,
}

/// A non-empty, borrowed view over a sorted slice of stops.
#[derive(Debug, Clone, Copy)]
pub struct StopTable<'a, C> {
    stops: &'a [Stop<C>],
}

impl<'a, C: Color> StopTable<'a, C> {
    /// Wrap `stops`. Returns `None` for an empty slice, which callers treat
    /// as "draw nothing".
    ///
    /// Stops must be sorted by non-decreasing position; this is not checked.
    pub fn new(stops: &'a [Stop<C>]) -> Option<Self> {
        if stops.is_empty() {
            None
        } else {
            Some(Self { stops })
        }
    }

    pub fn stops(&self) -> &'a [Stop<C>] {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; an empty table cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color of the first stop, at output precision.
    pub fn first_color(&self) -> Rgba8 {
        self.stops[0].color.to_rgba16().to_rgba8()
    }

    /// Color of the last stop, at output precision.
    pub fn last_color(&self) -> Rgba8 {
        self.stops[self.stops.len() - 1].color.to_rgba16().to_rgba8()
    }

    /// Classify `position` against the stops.
    ///
    /// Positions at or below zero, before the first stop, or NaN clamp to
    /// the first stop; positions at or past the last stop clamp to the last.
    /// Otherwise the upper bracket is the first stop whose position exceeds
    /// `position`.
    pub fn locate(&self, position: f64) -> Location {
        let first = &self.stops[0];
        if self.stops.len() == 1
            || position.is_nan()
            || position <= 0.0
            || position < first.position
        {
            return Location::First;
        }
        if position >= self.stops[self.stops.len() - 1].position {
            return Location::Last;
        }
        for (index, pair) in self.stops.windows(2).enumerate() {
            let (lower, upper) = (&pair[0], &pair[1]);
            if position < upper.position {
                let t = (position - lower.position) / (upper.position - lower.position);
                return Location::Segment { index, t };
            }
        }
        // Only reachable with unsorted stops.
        Location::Last
    }

    /// Resolve a gradient position to a color.
    pub fn resolve(&self, position: f64) -> Rgba8 {
        match self.locate(position) {
            Location::First => self.first_color(),
            Location::Last => self.last_color(),
            Location::Segment { index, t } => {
                blend(&self.stops[index].color, &self.stops[index + 1].color, t)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
