//! Radial gradients.
//!
//! A radial gradient is described by a center, a radius and a focal point,
//! all as fractions of the canvas size. When the focus sits on the center
//! the gradient is a set of concentric ellipses ([`draw_centered_radial`]);
//! otherwise each pixel's position is found by intersecting the ray from the
//! focus through the pixel with the outer circle ([`draw_focused_radial`]).

use log::{debug, trace};

use crate::basics::PointD;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::gradient_stops::{Stop, StopTable};

/// Rasterization path selected for a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialGeometry {
    /// Focus coincides with the center.
    Centered,
    /// Focus anywhere else.
    Focused,
}

impl RadialGeometry {
    pub fn classify(cx: f64, cy: f64, fx: f64, fy: f64) -> Self {
        if fx == cx && fy == cy {
            RadialGeometry::Centered
        } else {
            RadialGeometry::Focused
        }
    }
}

/// Draw a radial gradient with center `(cx, cy)`, radius `r` and focal
/// point `(fx, fy)`.
///
/// `r` is a fraction of the canvas width (and, for the centered path, of the
/// height along y). Radial drawing cannot fail; the `Result` mirrors
/// [`draw_linear`](crate::draw_linear).
pub fn draw_radial<D, C>(
    dst: &mut D,
    cx: f64,
    cy: f64,
    r: f64,
    fx: f64,
    fy: f64,
    stops: &[Stop<C>],
) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    let geometry = RadialGeometry::classify(cx, cy, fx, fy);
    debug!(
        "radial gradient center ({}, {}) r {} focus ({}, {}): {:?} path",
        cx, cy, r, fx, fy, geometry
    );
    match geometry {
        RadialGeometry::Centered => draw_centered_radial(dst, cx, cy, r, stops),
        RadialGeometry::Focused => draw_focused_radial(dst, cx, cy, r, fx, fy, stops),
    }
}

/// Concentric radial gradient.
///
/// Position is the elliptical distance from the center, with semi-axes
/// `r * width` and `r * height`. It is not clamped; stop resolution handles
/// positions past 1.
pub fn draw_centered_radial<D, C>(
    dst: &mut D,
    cx: f64,
    cy: f64,
    r: f64,
    stops: &[Stop<C>],
) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    let Some(table) = StopTable::new(stops) else {
        trace!("radial gradient without stops; nothing drawn");
        return Ok(());
    };
    let bb = dst.bounds();
    if bb.is_empty() {
        return Ok(());
    }

    let width = bb.width() as f64;
    let height = bb.height() as f64;
    let (cx, cy) = (cx * width, cy * height);
    let a = r * width;
    let b = r * height;

    for y in 0..bb.height() {
        let ny = (y as f64 - cy) / b;
        let ny2 = ny * ny;
        for x in 0..bb.width() {
            let nx = (x as f64 - cx) / a;
            let c = table.resolve((nx * nx + ny2).sqrt());
            dst.set(x + bb.x1, y + bb.y1, &c);
        }
    }
    Ok(())
}

/// Radial gradient with a focal point.
///
/// Position 0 is at the focus and grows along every ray leaving it, reaching
/// 1 where the ray crosses the circle of radius `r * width`. The focus is
/// placed in pixel space by scaling its offset from the center by width and
/// height; vertical pixel offsets are then divided by `height / width`. A
/// focus outside the circle is pulled in to one pixel short of the edge.
pub fn draw_focused_radial<D, C>(
    dst: &mut D,
    cx: f64,
    cy: f64,
    r: f64,
    fx: f64,
    fy: f64,
    stops: &[Stop<C>],
) -> Result<()>
where
    D: Canvas + ?Sized,
    C: Color,
{
    let Some(table) = StopTable::new(stops) else {
        trace!("radial gradient without stops; nothing drawn");
        return Ok(());
    };
    let bb = dst.bounds();
    if bb.is_empty() {
        return Ok(());
    }

    let geom = FocalGeometry::new(
        bb.width() as f64,
        bb.height() as f64,
        cx,
        cy,
        r,
        fx,
        fy,
    );
    for y in 0..bb.height() {
        for x in 0..bb.width() {
            let c = table.resolve(geom.position(x as f64, y as f64));
            dst.set(x + bb.x1, y + bb.y1, &c);
        }
    }
    Ok(())
}

// ============================================================================
// FocalGeometry
// ============================================================================

/// Invariants of a focal radial gradient in pixel space.
#[derive(Debug, Clone, Copy)]
struct FocalGeometry {
    cx: f64,
    cy: f64,
    yrat: f64,
    /// Focus relative to the center.
    focus: PointD,
    r: f64,
    r2: f64,
    mul: f64,
}

impl FocalGeometry {
    fn new(width: f64, height: f64, cx: f64, cy: f64, r: f64, fx: f64, fy: f64) -> Self {
        let mut focus = PointD::new((fx - cx) * width, (fy - cy) * height);
        let r = r * width;

        // The quadratic has no real root for a focus outside the circle.
        if focus.length() > r {
            let clamped = focus.with_length((r - 1.0).max(0.0));
            debug!(
                "radial focus ({}, {}) outside radius {}; clamped to ({}, {})",
                focus.x, focus.y, r, clamped.x, clamped.y
            );
            focus = clamped;
        }

        let r2 = r * r;
        Self {
            cx: cx * width,
            cy: cy * height,
            yrat: height / width,
            focus,
            r,
            r2,
            mul: r / (r2 - (focus.x * focus.x + focus.y * focus.y)),
        }
    }

    /// Gradient position of pixel `(x, y)`, relative to the bounds minimum.
    #[inline]
    fn position(&self, x: f64, y: f64) -> f64 {
        let f = self.focus;
        let dx = x - self.cx - f.x;
        let dy = (y - self.cy - f.y) / self.yrat;
        let d2 = dx * f.y - dy * f.x;
        let d3 = self.r2 * (dx * dx + dy * dy) - d2 * d2;
        // Rounding can push d3 just below zero.
        (dx * f.x + dy * f.y + d3.abs().sqrt()) * self.mul / self.r
    }
}

/// A radial gradient, the attribute set of an SVG `<radialGradient>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fx: f64,
    pub fy: f64,
}

impl RadialGradient {
    pub fn new(cx: f64, cy: f64, r: f64, fx: f64, fy: f64) -> Self {
        Self { cx, cy, r, fx, fy }
    }

    /// Gradient whose focus is its center.
    pub fn centered(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(cx, cy, r, cx, cy)
    }

    pub fn geometry(&self) -> RadialGeometry {
        RadialGeometry::classify(self.cx, self.cy, self.fx, self.fy)
    }

    pub fn draw<D, C>(&self, dst: &mut D, stops: &[Stop<C>]) -> Result<()>
    where
        D: Canvas + ?Sized,
        C: Color,
    {
        draw_radial(dst, self.cx, self.cy, self.r, self.fx, self.fy, stops)
    }
}

impl Default for RadialGradient {
    /// The SVG default: centered in the box, radius one half.
    fn default() -> Self {
        Self::centered(0.5, 0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectI;
    use crate::color::Rgba8;
    use crate::renderer_base::RendererBase;
    use crate::test_support::{px, render, WriteCounter};

    fn red() -> Rgba8 {
        Rgba8::new(255, 0, 0, 255)
    }
    fn blue() -> Rgba8 {
        Rgba8::new(0, 0, 255, 255)
    }
    fn red_blue() -> Vec<Stop> {
        vec![Stop::new(0.0, red()), Stop::new(1.0, blue())]
    }

    fn assert_close(a: &[u8], b: &[u8], tol: u8) {
        assert_eq!(a.len(), b.len());
        for (i, (&x, &y)) in a.iter().zip(b).enumerate() {
            assert!(
                x.abs_diff(y) <= tol,
                "byte {} (pixel {}) differs: {} vs {}",
                i,
                i / 4,
                x,
                y
            );
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            RadialGeometry::classify(0.5, 0.5, 0.5, 0.5),
            RadialGeometry::Centered
        );
        assert_eq!(
            RadialGeometry::classify(0.5, 0.5, 0.3, 0.5),
            RadialGeometry::Focused
        );
        assert_eq!(
            RadialGeometry::classify(0.5, 0.5, 0.5, 0.7),
            RadialGeometry::Focused
        );
    }

    #[test]
    fn test_centered_center_and_corners() {
        let buf = render(64, 64, |pf| {
            draw_centered_radial(pf, 0.5, 0.5, 0.5, &red_blue()).unwrap()
        });
        assert_eq!(px(&buf, 64, 32, 32), red());
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(px(&buf, 64, x, y), blue(), "corner ({}, {})", x, y);
        }
        // Halfway to the edge along x
        let mid = px(&buf, 64, 48, 32);
        assert_eq!(mid, crate::gradient_stops::blend(&red(), &blue(), 0.5));
    }

    #[test]
    fn test_centered_is_elliptical_on_wide_canvas() {
        let buf = render(64, 32, |pf| {
            draw_centered_radial(pf, 0.5, 0.5, 0.5, &red_blue()).unwrap()
        });
        // 16 px right of center and 8 px below are both halfway out
        assert_eq!(px(&buf, 64, 48, 16), px(&buf, 64, 32, 24));
    }

    #[test]
    fn test_dispatch_to_centered_is_identical() {
        let stops = red_blue();
        let a = render(48, 40, |pf| {
            draw_radial(pf, 0.4, 0.6, 0.45, 0.4, 0.6, &stops).unwrap()
        });
        let b = render(48, 40, |pf| {
            draw_centered_radial(pf, 0.4, 0.6, 0.45, &stops).unwrap()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn test_focused_with_zero_offset_matches_centered() {
        let stops = red_blue();
        for (w, h) in [(64, 64), (64, 32), (30, 50)] {
            let a = render(w, h, |pf| {
                draw_focused_radial(pf, 0.5, 0.5, 0.5, 0.5, 0.5, &stops).unwrap()
            });
            let b = render(w, h, |pf| {
                draw_centered_radial(pf, 0.5, 0.5, 0.5, &stops).unwrap()
            });
            assert_close(&a, &b, 1);
        }
    }

    #[test]
    fn test_focus_point_is_first_stop() {
        let buf = render(64, 64, |pf| {
            draw_radial(pf, 0.5, 0.5, 0.5, 0.25, 0.5, &red_blue()).unwrap()
        });
        // Focus at pixel (16, 32)
        assert_eq!(px(&buf, 64, 16, 32), red());
        // Outside the circle everything is the last stop
        assert_eq!(px(&buf, 64, 63, 63), blue());
        assert_eq!(px(&buf, 64, 0, 0), blue());
        // The gradient is compressed on the focus side
        let near = px(&buf, 64, 8, 32);
        let far = px(&buf, 64, 24, 32);
        assert!(near.b > far.b, "near={:?} far={:?}", near, far);
    }

    #[test]
    fn test_focus_outside_circle_is_clamped() {
        let buf = render(64, 64, |pf| {
            draw_radial(pf, 0.5, 0.5, 0.5, 1.5, 0.5, &red_blue()).unwrap()
        });
        // Focus pulled to 31 px right of the center
        assert_eq!(px(&buf, 64, 63, 32), red());
        assert_eq!(px(&buf, 64, 0, 32), blue());
    }

    /// Focal position computed step by step from the defining formula.
    #[allow(clippy::too_many_arguments)]
    fn focal_reference(
        w: f64,
        h: f64,
        cx: f64,
        cy: f64,
        r: f64,
        fx: f64,
        fy: f64,
        x: f64,
        y: f64,
    ) -> f64 {
        let (mut fx, mut fy) = ((fx - cx) * w, (fy - cy) * h);
        let (cx, cy, r) = (cx * w, cy * h, r * w);
        let len = fx.hypot(fy);
        if len > r {
            let k = (r - 1.0).max(0.0) / len;
            fx *= k;
            fy *= k;
        }
        let r2 = r * r;
        let mul = r / (r2 - (fx * fx + fy * fy));
        let yrat = h / w;
        let dx = x - cx - fx;
        let dy = (y - cy - fy) / yrat;
        let d2 = dx * fy - dy * fx;
        let d3 = r2 * (dx * dx + dy * dy) - d2 * d2;
        (dx * fx + dy * fy + d3.abs().sqrt()) * mul / r
    }

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn test_focal_geometry_square() {
        let g = FocalGeometry::new(64.0, 64.0, 0.5, 0.5, 0.5, 0.25, 0.5);
        assert_eq!(g.focus, PointD::new(-16.0, 0.0));
        assert_near(g.mul, 1.0 / 24.0);
        assert_near(g.position(16.0, 32.0), 0.0);
        assert_near(g.position(8.0, 32.0), 0.5);
    }

    #[test]
    fn test_focal_geometry_non_square() {
        // 64x32: focus offset scales by height along y and is not
        // divided by the aspect ratio
        let g = FocalGeometry::new(64.0, 32.0, 0.5, 0.5, 0.5, 0.25, 0.75);
        assert_eq!(g.focus, PointD::new(-16.0, 8.0));
        assert_near(g.yrat, 0.5);
        assert_near(g.mul, 1.0 / 22.0);
        assert_near(g.position(16.0, 24.0), 0.0);
        assert_near(g.position(16.0, 28.0), 0.4058274195579777);
        assert_near(g.position(16.0, 16.0), 0.4480184754795917);
        assert_near(g.position(48.0, 24.0), 0.6810848531663335);
        assert_near(g.position(0.0, 24.0), 1.067815153855894);
    }

    #[test]
    fn test_focal_geometry_clamps_only_outside() {
        // Exactly on the circle: kept
        let g = FocalGeometry::new(64.0, 64.0, 0.5, 0.5, 0.5, 0.5, 0.0);
        assert_eq!(g.focus, PointD::new(0.0, -32.0));

        // Outside: pulled to r - 1
        let g = FocalGeometry::new(64.0, 64.0, 0.5, 0.5, 0.5, 1.5, 0.5);
        assert_eq!(g.focus, PointD::new(31.0, 0.0));

        // Wide canvas: the test length is taken before the aspect division
        let g = FocalGeometry::new(128.0, 64.0, 0.5, 0.5, 0.25, 0.5, 0.9);
        assert_eq!(g.focus.x, 0.0);
        assert_near(g.focus.y, (0.9 - 0.5) * 64.0);

        let g = FocalGeometry::new(128.0, 64.0, 0.5, 0.5, 0.25, 0.5, 1.25);
        assert_eq!(g.focus.x, 0.0);
        assert_near(g.focus.y, 31.0);
    }

    #[test]
    fn test_negative_discriminant_uses_magnitude() {
        // Focus outside a unit circle gives d3 = 1 - 4 = -3 at (2, 1)
        let g = FocalGeometry {
            cx: 0.0,
            cy: 0.0,
            yrat: 1.0,
            focus: PointD::new(2.0, 0.0),
            r: 1.0,
            r2: 1.0,
            mul: 1.0 / (1.0 - 4.0),
        };
        let p = g.position(2.0, 1.0);
        assert!(p.is_finite());
        assert_near(p, -(3.0f64.sqrt()) / 3.0);
    }

    #[test]
    fn test_focused_pixels_follow_formula() {
        let stops = vec![
            Stop::new(0.0, red()),
            Stop::new(0.5, Rgba8::new(0, 255, 0, 16)),
            Stop::new(1.0, blue()),
        ];
        let table = StopTable::new(&stops).unwrap();
        for (w, h, fx, fy, r) in [
            (64u32, 64u32, 0.7, 0.7, 0.5),
            (128, 64, 0.5, 0.7, 0.4),
            (40, 90, 0.2, 0.35, 0.6),
            (64, 32, 1.4, 0.5, 0.5),
        ] {
            let buf = render(w, h, |pf| {
                draw_radial(pf, 0.5, 0.5, r, fx, fy, &stops).unwrap()
            });
            for y in 0..h {
                for x in 0..w {
                    let pos = focal_reference(
                        w as f64, h as f64, 0.5, 0.5, r, fx, fy, x as f64, y as f64,
                    );
                    assert_eq!(
                        px(&buf, w, x, y),
                        table.resolve(pos),
                        "{}x{} focus ({}, {}) pixel ({}, {})",
                        w,
                        h,
                        fx,
                        fy,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_stops_draw_nothing() {
        let stops: Vec<Stop> = Vec::new();
        let mut counter = WriteCounter::new(RectI::new(0, 0, 7, 9));
        draw_radial(&mut counter, 0.5, 0.5, 0.5, 0.5, 0.5, &stops).unwrap();
        draw_radial(&mut counter, 0.5, 0.5, 0.5, 0.2, 0.1, &stops).unwrap();
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn test_every_pixel_written_once() {
        for (fx, fy) in [(0.5, 0.5), (0.3, 0.6), (2.0, -1.0), (0.5, 0.0)] {
            let mut counter = WriteCounter::new(RectI::new(4, -2, 15, 9));
            draw_radial(&mut counter, 0.5, 0.5, 0.5, fx, fy, &red_blue()).unwrap();
            assert!(counter.all_exactly_once(), "focus ({}, {})", fx, fy);
        }
    }

    #[test]
    fn test_single_stop_fills() {
        let c = Rgba8::new(10, 20, 30, 40);
        let stops = [Stop::new(0.0, c)];
        let buf = render(9, 9, |pf| {
            draw_radial(pf, 0.5, 0.5, 0.3, 0.4, 0.4, &stops).unwrap()
        });
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(px(&buf, 9, x, y), c);
            }
        }
    }

    #[test]
    fn test_clip_box_centers_the_gradient() {
        let buf = render(40, 20, |pf| {
            let mut rb = RendererBase::new(pf);
            rb.clip_box_i(20, 0, 40, 20);
            RadialGradient::default().draw(&mut rb, &red_blue()).unwrap();
        });
        assert_eq!(px(&buf, 40, 30, 10), red());
        assert_eq!(px(&buf, 40, 10, 10), Rgba8::default());
    }

    #[test]
    fn test_radial_gradient_value() {
        let g = RadialGradient::centered(0.5, 0.5, 0.5);
        assert_eq!(g, RadialGradient::default());
        assert_eq!(g.geometry(), RadialGeometry::Centered);
        let g = RadialGradient::new(0.5, 0.5, 0.5, 0.4, 0.5);
        assert_eq!(g.geometry(), RadialGeometry::Focused);
    }
}
