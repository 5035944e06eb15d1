//! # gradient-raster
//!
//! SVG-style color gradients rasterized straight into a pixel buffer.
//!
//! A gradient is an ordered list of color [`Stop`]s plus a geometry that maps
//! every pixel to a scalar position. Stops are resolved with clamp-to-endpoint
//! spread and channel-wise linear interpolation in 16-bit space, truncated to
//! 8 bits on output.
//!
//! Supported geometries:
//!
//! - **Linear** ([`draw_linear`]): horizontal and vertical vectors take a
//!   fast path that resolves one color per column or row; any other vector is
//!   projected per pixel.
//! - **Radial** ([`draw_radial`]): concentric when the focus is the center,
//!   focal otherwise.
//!
//! All geometry is given as fractions of the target canvas, so the same
//! parameters render the same picture at any resolution.
//!
//! ## Canvases
//!
//! Rasterizers write through the [`Canvas`] trait. The crate provides an
//! RGBA32 pixel format over a caller-owned byte buffer ([`PixfmtRgba32`] on
//! a [`RowAccessor`]), a clipping wrapper ([`RendererBase`]) that confines a
//! gradient to a sub-rectangle, and, with the `image` feature, an impl for
//! `image::RgbaImage`.
//!
//! ```
//! use gradient_raster::{draw_linear, PixfmtRgba32, Rgba8, RowAccessor, Stop};
//!
//! let mut buf = vec![0u8; 64 * 64 * 4];
//! let mut pf = PixfmtRgba32::new(RowAccessor::new(&mut buf, 64, 64, 64 * 4)?)?;
//! let stops = [
//!     Stop::new(0.0, Rgba8::new(255, 0, 0, 255)),
//!     Stop::new(1.0, Rgba8::new(0, 0, 255, 255)),
//! ];
//! draw_linear(&mut pf, 0.0, 0.0, 1.0, 0.0, &stops)?;
//! assert_eq!(pf.pixel(0, 10), Rgba8::new(255, 0, 0, 255));
//! # Ok::<(), gradient_raster::GradientError>(())
//! ```

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Stop interpolation
pub mod gradient_stops;

// Pixel sinks
pub mod canvas;
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

// Rasterizers
pub mod linear;
pub mod radial;

#[cfg(test)]
mod test_support;

pub use basics::{PointD, RectI};
pub use canvas::Canvas;
pub use color::{rgba8_packed, Color, Rgba, Rgba16, Rgba8};
pub use error::{Axis, GradientError, Result};
pub use gradient_stops::{blend, Stop, StopTable};
pub use linear::{draw_hlinear, draw_linear, draw_vlinear, LinearGeometry, LinearGradient};
pub use pixfmt_rgba::PixfmtRgba32;
pub use radial::{
    draw_centered_radial, draw_focused_radial, draw_radial, RadialGeometry, RadialGradient,
};
pub use renderer_base::RendererBase;
pub use rendering_buffer::RowAccessor;
