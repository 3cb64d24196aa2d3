//! Stage grading: capture, binarize, align, score and threshold
//!
//! The controller holds only immutable options. Every call is independent,
//! so retries and concurrent grading of several stages need no coordination.

use crate::io::configuration::{DEFAULT_SEARCH_RADIUS, MAX_SEARCH_RADIUS};
use crate::io::error::{Result, invalid_input};
use crate::matching::alignment::{AlignmentOffset, align, refine_alignment};
use crate::matching::binarize::binarize;
use crate::raster::{BinaryMask, PixelBuffer, Rasterize};

/// Fixed reference for one puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct StageTarget {
    mask: BinaryMask,
    iou_threshold: f64,
}

impl StageTarget {
    /// Pair a target silhouette with the IoU a capture must reach
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if `iou_threshold` is not within `[0, 1]`
    pub fn new(mask: BinaryMask, iou_threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&iou_threshold) {
            return Err(invalid_input(
                "iou_threshold",
                &iou_threshold,
                &"threshold must lie within [0, 1]",
            ));
        }

        Ok(Self {
            mask,
            iou_threshold,
        })
    }

    /// Reference silhouette
    pub const fn mask(&self) -> &BinaryMask {
        &self.mask
    }

    /// Minimum passing score
    pub const fn iou_threshold(&self) -> f64 {
        self.iou_threshold
    }
}

/// Outcome of one grading attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationResult {
    /// IoU of the aligned capture against the target, in `[0, 1]`
    pub score: f64,
    /// Whether `score` reached the stage threshold
    pub success: bool,
    /// Translation applied to the capture before scoring
    pub offset: AlignmentOffset,
}

/// Tunables for the grading pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Pixels searched around the centroid guess; zero keeps the guess as is
    pub search_radius: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

/// Grades captured arrangements against stage targets
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationController {
    options: ValidationOptions,
}

impl ValidationController {
    /// Create a controller with the given options
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the search radius exceeds `MAX_SEARCH_RADIUS`
    pub fn new(options: ValidationOptions) -> Result<Self> {
        if options.search_radius > MAX_SEARCH_RADIUS {
            return Err(invalid_input(
                "search_radius",
                &options.search_radius,
                &format!("search radius must not exceed {MAX_SEARCH_RADIUS}"),
            ));
        }

        Ok(Self { options })
    }

    /// Options this controller grades with
    pub const fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Grade a captured buffer against a stage
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the capture and the stage target differ in dimensions
    pub fn validate(&self, stage: &StageTarget, captured: &PixelBuffer) -> Result<ValidationResult> {
        let candidate = binarize(captured);
        log::debug!(
            "binarized {}x{} capture: {} occupied pixels",
            candidate.width(),
            candidate.height(),
            candidate.occupied_count()
        );
        self.validate_mask(stage, &candidate)
    }

    /// Grade an already binarized candidate mask against a stage
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the candidate and the stage target differ in dimensions
    pub fn validate_mask(
        &self,
        stage: &StageTarget,
        candidate: &BinaryMask,
    ) -> Result<ValidationResult> {
        stage.mask.ensure_same_dimensions(candidate, "candidate")?;

        let guess = align(&stage.mask, candidate);
        let (offset, score) =
            refine_alignment(&stage.mask, candidate, guess, self.options.search_radius)?;
        let success = score >= stage.iou_threshold;

        log::debug!(
            "aligned with {offset} (centroid guess {guess}), iou {score:.4} against threshold {:.4}: {}",
            stage.iou_threshold,
            if success { "pass" } else { "fail" }
        );

        Ok(ValidationResult {
            score,
            success,
            offset,
        })
    }

    /// Pull a frame from `rasterizer` and grade it
    ///
    /// # Errors
    ///
    /// Returns an error if the rasterizer fails or the frame does not match the stage dimensions
    pub fn validate_capture(
        &self,
        stage: &StageTarget,
        rasterizer: &mut impl Rasterize,
    ) -> Result<ValidationResult> {
        let captured = rasterizer.rasterize()?;
        self.validate(stage, &captured)
    }
}

/// Grade a captured buffer with the default single-shot alignment
///
/// # Errors
///
/// Returns an invalid input error if the capture and the stage target differ in dimensions
pub fn validate(stage: &StageTarget, captured: &PixelBuffer) -> Result<ValidationResult> {
    ValidationController::default().validate(stage, captured)
}
