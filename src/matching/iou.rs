//! Intersection-over-Union scoring of aligned masks

use crate::io::error::Result;
use crate::matching::alignment::AlignmentOffset;
use crate::raster::BinaryMask;

/// Raw pixel tallies behind an IoU score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlapCounts {
    /// Pixels occupied in both masks
    pub overlap: usize,
    /// Pixels occupied in either mask
    pub union: usize,
}

impl OverlapCounts {
    /// Overlap divided by union, or zero when both masks are empty
    pub fn score(&self) -> f64 {
        if self.union == 0 {
            0.0
        } else {
            self.overlap as f64 / self.union as f64
        }
    }
}

/// Count overlap and union over the target's frame
///
/// For each target pixel `(x, y)` the candidate is read at
/// `(x - dx, y - dy)`. Reads that fall outside the candidate are background,
/// so candidate pixels shifted out of frame are dropped from the union. The
/// score is therefore only symmetric under swapping the masks and negating
/// the offset when no occupied pixel of either mask leaves the frame.
///
/// # Errors
///
/// Returns an invalid input error if the masks differ in dimensions
pub fn overlap_counts(
    target: &BinaryMask,
    candidate: &BinaryMask,
    offset: AlignmentOffset,
) -> Result<OverlapCounts> {
    target.ensure_same_dimensions(candidate, "candidate")?;

    let mut counts = OverlapCounts::default();
    for y in 0..target.height() {
        for x in 0..target.width() {
            let t = target.get(x, y);
            let p = offset
                .source_of(x, y)
                .is_some_and(|(sx, sy)| candidate.sample(sx, sy));
            if t && p {
                counts.overlap += 1;
            }
            if t || p {
                counts.union += 1;
            }
        }
    }

    Ok(counts)
}

/// Intersection-over-Union of `target` and `candidate` shifted by `offset`
///
/// Two empty masks score `0.0`; this is a defined result rather than an error.
///
/// # Errors
///
/// Returns an invalid input error if the masks differ in dimensions
pub fn iou(target: &BinaryMask, candidate: &BinaryMask, offset: AlignmentOffset) -> Result<f64> {
    overlap_counts(target, candidate, offset).map(|counts| counts.score())
}
