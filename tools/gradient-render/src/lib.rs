// Gradient rendering helpers for the gradient-render CLI.
//
// Provides stop parsing, the reference scenes, PNG output and logger setup.

use std::path::Path;
use std::sync::Once;

use anyhow::{bail, Context, Result};
use gradient_raster::{draw_linear, draw_radial, rgba8_packed, Rgba8, Stop};
use image::RgbaImage;

// ============================================================================
// Stops
// ============================================================================

/// Red, translucent green, blue: the ramp every reference scene uses.
pub fn default_stops() -> Vec<Stop> {
    vec![
        Stop::new(0.0, Rgba8::new(255, 0, 0, 255)),
        Stop::new(0.5, Rgba8::new(0, 255, 0, 16)),
        Stop::new(1.0, Rgba8::new(0, 0, 255, 255)),
    ]
}

/// Parse a stop written as `POS:RRGGBBAA` or `POS:RRGGBB` (opaque).
/// A leading `#` on the color is accepted.
pub fn parse_stop(s: &str) -> Result<Stop> {
    let (pos, hex) = s
        .split_once(':')
        .with_context(|| format!("stop '{}' is not POS:RRGGBB[AA]", s))?;
    let position: f64 = pos
        .trim()
        .parse()
        .with_context(|| format!("invalid stop position '{}'", pos))?;
    let hex = hex.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("invalid stop color '{}': expected hex digits only", hex);
    }
    let opaque = match hex.len() {
        6 => true,
        8 => false,
        n => bail!("stop color '{}' has {} hex digits, expected 6 or 8", hex, n),
    };
    let value = u32::from_str_radix(hex, 16)
        .with_context(|| format!("invalid stop color '{}'", hex))?;
    let color = if opaque {
        rgba8_packed((value << 8) | 0xFF)
    } else {
        rgba8_packed(value)
    };
    Ok(Stop::new(position, color))
}

// ============================================================================
// Scenes
// ============================================================================

/// One gradient draw, in canvas fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scene {
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    Radial {
        cx: f64,
        cy: f64,
        r: f64,
        fx: f64,
        fy: f64,
    },
}

impl Scene {
    /// Draw the scene onto a fresh transparent `width`×`height` image.
    pub fn render(&self, width: u32, height: u32, stops: &[Stop]) -> Result<RgbaImage> {
        let mut img = RgbaImage::new(width, height);
        match *self {
            Scene::Linear { x0, y0, x1, y1 } => draw_linear(&mut img, x0, y0, x1, y1, stops)?,
            Scene::Radial { cx, cy, r, fx, fy } => {
                draw_radial(&mut img, cx, cy, r, fx, fy, stops)?
            }
        }
        Ok(img)
    }
}

/// The reference renders written by `gradient-render demo`, with file names.
pub fn demo_scenes() -> [(&'static str, Scene); 5] {
    [
        (
            "hlinear.png",
            Scene::Linear {
                x0: 0.1,
                y0: 0.1,
                x1: 0.9,
                y1: 0.1,
            },
        ),
        (
            "vlinear.png",
            Scene::Linear {
                x0: 0.1,
                y0: 0.1,
                x1: 0.1,
                y1: 0.9,
            },
        ),
        (
            "linear.png",
            Scene::Linear {
                x0: 0.1,
                y0: 0.1,
                x1: 0.9,
                y1: 0.9,
            },
        ),
        (
            "simpleradial.png",
            Scene::Radial {
                cx: 0.5,
                cy: 0.5,
                r: 0.5,
                fx: 0.5,
                fy: 0.5,
            },
        ),
        (
            "focusradial.png",
            Scene::Radial {
                cx: 0.5,
                cy: 0.5,
                r: 0.5,
                fx: 0.7,
                fy: 0.7,
            },
        ),
    ]
}

// ============================================================================
// Output
// ============================================================================

/// Encode `img` as PNG at `path`.
pub fn save_png(path: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}

// ============================================================================
// Logging
// ============================================================================

static LOG_INIT: Once = Once::new();

/// Install the global logger once. `RUST_LOG` wins; otherwise the level is
/// `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    LOG_INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if verbose {
            builder.filter_level(log::LevelFilter::Debug);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
