//! Centroid-based registration of a candidate mask onto a target mask
//!
//! The player's arrangement is assumed to have the right shape but sit at the
//! wrong place in the frame. Matching the centroids of the two occupied sets
//! gives a single translation guess; an optional local search can refine it.

use crate::io::error::Result;
use crate::matching::iou::iou;
use crate::raster::BinaryMask;
use std::fmt;
use std::ops::Neg;

/// Integer translation applied to a candidate mask
///
/// A candidate pixel at `(x, y)` lands on target pixel `(x + dx, y + dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignmentOffset {
    /// Horizontal shift in pixels
    pub dx: i64,
    /// Vertical shift in pixels
    pub dy: i64,
}

impl AlignmentOffset {
    /// No translation
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// Create an offset from its components
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Candidate coordinate that lands on target pixel `(x, y)`
    ///
    /// Returns `None` when the coordinate is not representable, which callers
    /// treat as an out-of-frame read.
    pub fn source_of(self, x: usize, y: usize) -> Option<(i64, i64)> {
        let x = i64::try_from(x).ok()?.checked_sub(self.dx)?;
        let y = i64::try_from(y).ok()?.checked_sub(self.dy)?;
        Some((x, y))
    }

    // Chebyshev first so the search prefers the tightest ring around the guess
    const fn distance_key(self, other: Self) -> (u64, u64) {
        let ax = self.dx.abs_diff(other.dx);
        let ay = self.dy.abs_diff(other.dy);
        let chebyshev = if ax > ay { ax } else { ay };
        (chebyshev, ax.saturating_add(ay))
    }
}

// Saturates, so `i64::MIN` negates to `i64::MAX`
impl Neg for AlignmentOffset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.dx.saturating_neg(), self.dy.saturating_neg())
    }
}

impl fmt::Display for AlignmentOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// Round to the nearest integer, sending halves towards positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Mean `(x, y)` of the occupied pixels
///
/// An empty mask has no meaningful centre of mass, so the geometric centre of
/// the frame `(width / 2, height / 2)` is returned instead.
pub fn centroid(mask: &BinaryMask) -> (f64, f64) {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0usize;

    for (x, y) in mask.occupied() {
        sum_x += x as f64;
        sum_y += y as f64;
        count += 1;
    }

    if count == 0 {
        return (mask.width() as f64 / 2.0, mask.height() as f64 / 2.0);
    }

    (sum_x / count as f64, sum_y / count as f64)
}

/// Translation moving the candidate's centroid onto the target's
///
/// Each axis is rounded independently with [`round_half_up`]. This is a
/// single-shot guess, not a search over translations.
pub fn align(target: &BinaryMask, candidate: &BinaryMask) -> AlignmentOffset {
    let (target_x, target_y) = centroid(target);
    let (candidate_x, candidate_y) = centroid(candidate);

    AlignmentOffset::new(
        round_half_up(target_x - candidate_x),
        round_half_up(target_y - candidate_y),
    )
}

/// Search offsets within `radius` of `initial` for the best IoU
///
/// Every offset in the square `initial ± radius` is scored. Ties keep the
/// offset nearest to `initial`, so a radius of zero returns `initial`
/// unchanged together with its score.
///
/// # Errors
///
/// Returns an invalid input error if the masks differ in dimensions
pub fn refine_alignment(
    target: &BinaryMask,
    candidate: &BinaryMask,
    initial: AlignmentOffset,
    radius: usize,
) -> Result<(AlignmentOffset, f64)> {
    let mut best_offset = initial;
    let mut best_score = iou(target, candidate, initial)?;

    let reach = i64::try_from(radius).unwrap_or(i64::MAX);
    for dy in initial.dy.saturating_sub(reach)..=initial.dy.saturating_add(reach) {
        for dx in initial.dx.saturating_sub(reach)..=initial.dx.saturating_add(reach) {
            let offset = AlignmentOffset::new(dx, dy);
            if offset == initial {
                continue;
            }

            let score = iou(target, candidate, offset)?;
            let closer = offset.distance_key(initial) < best_offset.distance_key(initial);
            let tied = (score - best_score).abs() < f64::EPSILON;
            if (score > best_score && !tied) || (tied && closer) {
                best_offset = offset;
                best_score = score;
            }
        }
    }

    Ok((best_offset, best_score))
}
