//! Raster data passed between grading stages
//!
//! This module contains the plain data types of the pipeline:
//! - RGBA pixel buffers captured from the arrangement
//! - Binary occupancy masks derived from them
//! - The rasterizer capability the surrounding game injects

/// RGBA pixel buffers
pub mod buffer;
/// Injected arrangement rasterizer
pub mod capture;
/// Binary occupancy masks
pub mod mask;

pub use buffer::PixelBuffer;
pub use capture::{CapturedFrame, Rasterize};
pub use mask::{BinaryMask, MaskBounds};
