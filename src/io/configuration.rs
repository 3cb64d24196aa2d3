//! Grading constants and runtime configuration defaults

// Stage defaults
/// IoU a capture must reach when no threshold is given
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.8;

/// Ring width in pixels for generated outline assets
pub const DEFAULT_OUTLINE_THICKNESS: usize = 2;

// Zero keeps the single-shot centroid alignment
/// Neighbourhood searched around the centroid guess
pub const DEFAULT_SEARCH_RADIUS: usize = 0;

// Search cost grows with the square of the radius
/// Maximum allowed alignment search radius
pub const MAX_SEARCH_RADIUS: usize = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed buffer dimension
pub const MAX_MASK_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to generated outline filenames
pub const OUTLINE_SUFFIX: &str = "_outline";
/// Suffix added to grading overlay filenames
pub const OVERLAY_SUFFIX: &str = "_overlay";

/// Colour written for outline pixels
pub const OUTLINE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Overlay colour where target and candidate agree
pub const OVERLAY_OVERLAP_COLOR: [u8; 4] = [64, 200, 96, 255];
/// Overlay colour for target pixels the candidate misses
pub const OVERLAY_TARGET_ONLY_COLOR: [u8; 4] = [220, 60, 60, 255];
/// Overlay colour for candidate pixels outside the target
pub const OVERLAY_CANDIDATE_ONLY_COLOR: [u8; 4] = [60, 110, 230, 255];
/// Overlay colour for background
pub const OVERLAY_BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
