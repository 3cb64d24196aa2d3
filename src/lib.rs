//! Silhouette matching for tangram puzzle stages
//!
//! A captured arrangement of puzzle pieces is binarized into an occupancy mask,
//! registered onto the stage's target silhouette by centroid matching, and
//! scored by Intersection-over-Union against the stage threshold. The same
//! binarization feeds the outline extractor used to author stage assets.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Binarization, alignment, scoring and outline extraction
pub mod matching;
/// Pixel buffers, occupancy masks and the rasterizer capability
pub mod raster;

pub use io::error::{GraderError, Result};
pub use matching::{
    AlignmentOffset, StageTarget, ValidationController, ValidationOptions, ValidationResult,
    align, binarize, centroid, extract_outline, iou, validate,
};
pub use raster::{BinaryMask, PixelBuffer, Rasterize};
