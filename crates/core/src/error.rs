//! Error types for the rasterpad core.

use thiserror::Error;

/// Errors produced by canvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Width or height was zero when creating a grid, or the pixel count
    /// overflowed `usize`.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two grids had incompatible dimensions for a blend.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A color code could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
