/// Centroid alignment and local offset refinement
pub mod alignment;
/// Colour buffer to occupancy mask conversion
pub mod binarize;
/// Intersection-over-Union scoring
pub mod iou;
/// Outline ring extraction for asset authoring
pub mod outline;
/// End-to-end stage grading
pub mod validation;

pub use alignment::{AlignmentOffset, align, centroid, refine_alignment};
pub use binarize::binarize;
pub use iou::{OverlapCounts, iou, overlap_counts};
pub use outline::extract_outline;
pub use validation::{StageTarget, ValidationController, ValidationOptions, ValidationResult, validate};
