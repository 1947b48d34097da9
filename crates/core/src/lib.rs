#![deny(unsafe_code)]
//! Core algorithms for the rasterpad canvas engine.
//!
//! Provides the [`Pixel`] value type with integer alpha-over blending, the
//! [`PixelGrid`] store used for both the canvas and the overlay buffer, the
//! shape rasterizer, the commit step that blends the overlay into the canvas,
//! flood fill, and the grayscale/gradient effects.
//!
//! Everything here is pure computation over in-memory grids; file formats and
//! the command pipeline live in `rasterpad-session`.

pub mod compose;
pub mod effects;
pub mod error;
pub mod fill;
pub mod grid;
pub mod pixel;
pub mod raster;

pub use error::CanvasError;
pub use grid::PixelGrid;
pub use pixel::Pixel;
