//! Error types for gradient drawing.

use core::fmt;

use thiserror::Error;

/// Axis named by a bounds error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors reported by the drawing entry points and the provided canvases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// A linear gradient's start lies after its end on one axis.
    #[error("invalid bounds {axis}0({start})>{axis}1({end})")]
    InvalidBounds { axis: Axis, start: f64, end: f64 },

    /// A pixel buffer cannot hold the requested rows.
    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Rows are too short for the pixel format's width.
    #[error("row stride too small: {width} pixels need {needed} bytes, stride is {stride}")]
    StrideTooSmall { width: u32, needed: usize, stride: u32 },
}

/// Result type alias for gradient operations.
pub type Result<T> = std::result::Result<T, GradientError>;

/// Fail with [`GradientError::InvalidBounds`] when `start > end`.
pub(crate) fn check_bounds(axis: Axis, start: f64, end: f64) -> Result<()> {
    if start > end {
        return Err(GradientError::InvalidBounds { axis, start, end });
    }
    Ok(())
}
