//! Overlay rendering of a graded capture against its target
//!
//! Each pixel of the target frame is coloured by how the two masks agree
//! under the alignment offset, which makes a failing verdict easy to diagnose.

use crate::io::configuration::{
    OVERLAY_BACKGROUND_COLOR, OVERLAY_CANDIDATE_ONLY_COLOR, OVERLAY_OVERLAP_COLOR,
    OVERLAY_TARGET_ONLY_COLOR,
};
use crate::io::error::Result;
use crate::io::image::save_png;
use crate::matching::alignment::AlignmentOffset;
use crate::raster::BinaryMask;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Agreement between target and aligned candidate at one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelAgreement {
    /// Occupied in both masks
    Overlap,
    /// Occupied in the target only
    TargetOnly,
    /// Occupied in the candidate only
    CandidateOnly,
    /// Occupied in neither mask
    Background,
}

impl PixelAgreement {
    /// Classify one pixel from its target and candidate occupancy
    pub const fn classify(target: bool, candidate: bool) -> Self {
        match (target, candidate) {
            (true, true) => Self::Overlap,
            (true, false) => Self::TargetOnly,
            (false, true) => Self::CandidateOnly,
            (false, false) => Self::Background,
        }
    }

    /// Overlay colour for this agreement class
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Overlap => OVERLAY_OVERLAP_COLOR,
            Self::TargetOnly => OVERLAY_TARGET_ONLY_COLOR,
            Self::CandidateOnly => OVERLAY_CANDIDATE_ONLY_COLOR,
            Self::Background => OVERLAY_BACKGROUND_COLOR,
        }
    }
}

/// Render the overlay in the target's frame
///
/// The candidate is sampled exactly as the IoU scorer samples it, so the
/// coloured pixels are the ones the score was computed from.
///
/// # Errors
///
/// Returns an invalid input error if the masks differ in dimensions
pub fn render_overlay(
    target: &BinaryMask,
    candidate: &BinaryMask,
    offset: AlignmentOffset,
) -> Result<RgbaImage> {
    target.ensure_same_dimensions(candidate, "candidate")?;

    let (width, height) = target.dimensions();
    Ok(ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let agreement = PixelAgreement::classify(
            target.get(x as usize, y as usize),
            offset
                .source_of(x as usize, y as usize)
                .is_some_and(|(sx, sy)| candidate.sample(sx, sy)),
        );
        Rgba(agreement.color())
    }))
}

/// Render the overlay and write it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The masks differ in dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_overlay(
    target: &BinaryMask,
    candidate: &BinaryMask,
    offset: AlignmentOffset,
    output_path: &Path,
) -> Result<()> {
    let overlay = render_overlay(target, candidate, offset)?;
    save_png(&overlay, output_path)
}
