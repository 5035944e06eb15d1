//! Linear gradients.
//!
//! [`draw_linear`] validates the gradient vector and dispatches by its
//! shape: purely horizontal and purely vertical vectors go to the
//! axis-aligned fast paths ([`draw_hlinear`], [`draw_vlinear`]), which
//! resolve one color per column or row and replicate it; every other vector,
//! including a zero-length one, goes through the general projection path.
//!
//! All coordinates are fractions of the canvas width (x) and height (y) and
//! may lie outside [0, 1].

use log::{debug, trace};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{check_bounds, Axis, Result};
use crate::gradient_stops::{Stop, StopTable};

// ============================================================================
// Geometry classification
// ============================================================================

/// Rasterization path selected for a linear gradient vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearGeometry {
    /// `y0 == y1` and `x0 != x1`.
    Horizontal,
    /// `x0 == x1` and `y0 != y1`.
    Vertical,
    /// Any other vector, including the zero-length one.
    General,
}

impl LinearGeometry {
    pub fn classify(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        if y0 == y1 && x0 != x1 {
            LinearGeometry::Horizontal
        } else if x0 == x1 && y0 != y1 {
            LinearGeometry::Vertical
        } else {
            LinearGeometry::General
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Draw a linear gradient from `(x0, y0)` to `(x1, y1)`.
///
/// Fails with [`GradientError::InvalidBounds`](crate::GradientError) before
/// touching the canvas if `x0 > x1` or `y0 > y1`. An empty `stops` slice
/// draws nothing.
pub fn draw_linear<D, C>(
    dst: &mut D,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    stops: &[Stop<C>],
) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    check_bounds(Axis::X, x0, x1)?;
    check_bounds(Axis::Y, y0, y1)?;

    let geometry = LinearGeometry::classify(x0, y0, x1, y1);
    debug!(
        "linear gradient ({}, {}) -> ({}, {}): {:?} path",
        x0, y0, x1, y1, geometry
    );
    match geometry {
        LinearGeometry::Horizontal => draw_hlinear(dst, x0, x1, stops),
        LinearGeometry::Vertical => draw_vlinear(dst, y0, y1, stops),
        LinearGeometry::General => {
            let Some(table) = StopTable::new(stops) else {
                trace!("linear gradient without stops; nothing drawn");
                return Ok(());
            };
            render_general(dst, x0, y0, x1, y1, &table);
            Ok(())
        }
    }
}

// ============================================================================
// Axis-aligned fast paths
// ============================================================================

/// Draw a purely horizontal gradient running from `x0` to `x1`.
///
/// One color is resolved per column and copied down the whole column.
pub fn draw_hlinear<D, C>(dst: &mut D, x0: f64, x1: f64, stops: &[Stop<C>]) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    check_bounds(Axis::X, x0, x1)?;
    let Some(table) = StopTable::new(stops) else {
        trace!("horizontal gradient without stops; nothing drawn");
        return Ok(());
    };
    let bb = dst.bounds();
    if bb.is_empty() {
        return Ok(());
    }

    let width = bb.width();
    let x0 = x0 * width as f64;
    let x1 = x1 * width as f64;
    let dx = x1 - x0;

    for x in 0..width {
        let c = table.resolve((x as f64 - x0) / dx);
        for y in bb.y1..bb.y2 {
            dst.set(x + bb.x1, y, &c);
        }
    }
    Ok(())
}

/// Draw a purely vertical gradient running from `y0` to `y1`.
///
/// One color is resolved per row and copied across the whole row.
pub fn draw_vlinear<D, C>(dst: &mut D, y0: f64, y1: f64, stops: &[Stop<C>]) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    check_bounds(Axis::Y, y0, y1)?;
    let Some(table) = StopTable::new(stops) else {
        trace!("vertical gradient without stops; nothing drawn");
        return Ok(());
    };
    let bb = dst.bounds();
    if bb.is_empty() {
        return Ok(());
    }

    let height = bb.height();
    let y0 = y0 * height as f64;
    let y1 = y1 * height as f64;
    let dy = y1 - y0;

    for y in 0..height {
        let c = table.resolve((y as f64 - y0) / dy);
        dst.fill_hspan(bb.x1, y + bb.y1, bb.width() as u32, &c);
    }
    Ok(())
}

// ============================================================================
// General path
// ============================================================================

/// Arbitrary-angle linear gradient by projection onto the gradient vector.
///
/// The start line passes through `(x0, y0)` perpendicular to the gradient
/// vector. Pixels on the far side of it take the first stop directly;
/// the rest are positioned by their distance from the start line, in units
/// of the vector's length.
fn render_general<D, C>(dst: &mut D, x0: f64, y0: f64, x1: f64, y1: f64, table: &StopTable<'_, C>)
where
    D: Canvas + ?Sized,
    C: Color,
{
    let bb = dst.bounds();
    if bb.is_empty() {
        return;
    }
    let width = bb.width() as f64;
    let height = bb.height() as f64;

    let (x0, y0) = (x0 * width, y0 * height);
    let (x1, y1) = (x1 * width, y1 * height);

    let (dx, dy) = (x1 - x0, y1 - y0);
    let (px0, py0) = (x0 - dy, y0 + dx);
    let mag = dx.hypot(dy);

    let first = table.first_color();
    if mag == 0.0 {
        // Coincident endpoints: everything is before the gradient.
        for y in bb.y1..bb.y2 {
            dst.fill_hspan(bb.x1, y, bb.width() as u32, &first);
        }
        return;
    }
    let mag2 = mag * mag;

    for y in 0..bb.height() {
        let fy = y as f64;
        for x in 0..bb.width() {
            let fx = x as f64;
            let s0 = (px0 - x0) * (fy - y0) - (py0 - y0) * (fx - x0);
            let c = if s0 > 0.0 {
                first
            } else {
                let u = ((fx - x0) * (px0 - x0) + (fy - y0) * (py0 - y0)) / mag2;
                let (x2, y2) = (x0 + u * (px0 - x0), y0 + u * (py0 - y0));
                table.resolve((fx - x2).hypot(fy - y2) / mag)
            };
            dst.set(x + bb.x1, y + bb.y1, &c);
        }
    }
}

// ============================================================================
// LinearGradient
// ============================================================================

/// A linear gradient vector, the attribute set of an SVG `<linearGradient>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The SVG default vector: left edge to right edge.
    pub fn horizontal() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    pub fn geometry(&self) -> LinearGeometry {
        LinearGeometry::classify(self.x0, self.y0, self.x1, self.y1)
    }

    pub fn draw<D, C>(&self, dst: &mut D, stops: &[Stop<C>]) -> Result<()>
    where
        D: Canvas + ?Sized,
        C: Color,
    {
        draw_linear(dst, self.x0, self.y0, self.x1, self.y1, stops)
    }
}

impl Default for LinearGradient {
    fn default() -> Self {
        Self::horizontal()
    }
}

// ============================================================================
// Tests
// ============================================================================
