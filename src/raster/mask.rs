//! Binary occupancy masks separating shape pixels from background

use crate::io::error::{Result, dimension_mismatch};
use bitvec::prelude::*;
use std::fmt;

/// Inclusive rectangle covering every occupied pixel of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskBounds {
    /// Leftmost occupied column
    pub min_x: usize,
    /// Topmost occupied row
    pub min_y: usize,
    /// Rightmost occupied column
    pub max_x: usize,
    /// Bottommost occupied row
    pub max_y: usize,
}

impl MaskBounds {
    /// Width of the rectangle in pixels
    pub const fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    /// Height of the rectangle in pixels
    pub const fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Row-major grid of occupied flags
///
/// Backed by a packed bitset, one bit per pixel. A mask is never resized or
/// edited after construction; masks that are compared must share dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    bits: BitVec,
}

impl BinaryMask {
    /// Create a mask with no occupied pixels
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: bitvec![0; width * height],
        }
    }

    /// Create a mask with every pixel occupied
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: bitvec![1; width * height],
        }
    }

    /// Build a mask by evaluating `occupied` at every `(x, y)` in row-major order
    pub fn from_fn(
        width: usize,
        height: usize,
        mut occupied: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let mut bits = BitVec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                bits.push(occupied(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build a mask with exactly the given `(x, y)` pixels occupied
    ///
    /// Points outside the mask are ignored.
    pub fn from_points(width: usize, height: usize, points: &[(usize, usize)]) -> Self {
        let mut mask = Self::empty(width, height);
        for &(x, y) in points {
            if let Some(index) = mask.index(x, y) {
                mask.bits.set(index, true);
            }
        }
        mask
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Occupancy at `(x, y)`; false outside the mask
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Occupancy at signed coordinates
    ///
    /// Translated lookups land outside the frame; those read as background
    /// rather than being clamped or wrapped.
    pub fn sample(&self, x: i64, y: i64) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y),
            _ => false,
        }
    }

    /// Number of occupied pixels
    pub fn occupied_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pixel is occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate the `(x, y)` coordinates of occupied pixels in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.bits
            .iter_ones()
            .map(move |index| (index % width, index / width))
    }

    /// Smallest rectangle containing every occupied pixel
    pub fn bounds(&self) -> Option<MaskBounds> {
        let mut occupied = self.occupied();
        let (x0, y0) = occupied.next()?;
        let start = MaskBounds {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };

        Some(occupied.fold(start, |bounds, (x, y)| MaskBounds {
            min_x: bounds.min_x.min(x),
            min_y: bounds.min_y.min(y),
            max_x: bounds.max_x.max(x),
            max_y: bounds.max_y.max(y),
        }))
    }

    /// Check that `other` can be compared pixel-for-pixel with this mask
    ///
    /// # Errors
    ///
    /// Returns an invalid input error naming `parameter` if the dimensions differ
    pub fn ensure_same_dimensions(&self, other: &Self, parameter: &'static str) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(dimension_mismatch(
                parameter,
                self.dimensions(),
                other.dimensions(),
            ))
        }
    }
}

impl fmt::Debug for BinaryMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BinaryMask({}x{}, {} occupied)",
            self.width,
            self.height,
            self.occupied_count()
        )?;
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
