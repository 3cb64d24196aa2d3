//! Outline ring generation for authoring stage assets
//!
//! Produces the band of background pixels lying within a square
//! neighbourhood of the shape. The shape interior is never part of the ring.

use crate::io::error::{Result, invalid_input};
use crate::raster::BinaryMask;
use ndarray::Array2;

/// Prefix sums of occupied pixels for constant-time rectangle counts
///
/// Entry `(row, col)` holds the number of occupied pixels strictly above
/// `row` and strictly left of `col`, so the table is one larger than the
/// mask in both directions.
struct SummedArea {
    table: Array2<usize>,
}

impl SummedArea {
    fn new(mask: &BinaryMask) -> Self {
        let (width, height) = mask.dimensions();
        let mut table = Array2::<usize>::zeros((height + 1, width + 1));

        for y in 0..height {
            let mut row_sum = 0;
            for x in 0..width {
                row_sum += usize::from(mask.get(x, y));
                let above = table.get((y, x + 1)).copied().unwrap_or(0);
                if let Some(cell) = table.get_mut((y + 1, x + 1)) {
                    *cell = above + row_sum;
                }
            }
        }

        Self { table }
    }

    fn at(&self, row: usize, col: usize) -> usize {
        self.table.get((row, col)).copied().unwrap_or(0)
    }

    // Inclusive bounds; callers clip to the mask first
    fn count(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> usize {
        (self.at(y1 + 1, x1 + 1) + self.at(y0, x0)) - (self.at(y0, x1 + 1) + self.at(y1 + 1, x0))
    }
}

/// Extract the outline ring around the occupied region of `mask`
///
/// A background pixel becomes an outline pixel when any pixel within
/// `thickness` steps horizontally and vertically (clipped to the mask, no
/// wrap-around) is occupied. Occupied pixels never appear in the output.
///
/// # Errors
///
/// Returns an invalid input error if `thickness` is zero
pub fn extract_outline(mask: &BinaryMask, thickness: usize) -> Result<BinaryMask> {
    if thickness < 1 {
        return Err(invalid_input(
            "thickness",
            &thickness,
            &"outline thickness must be at least 1",
        ));
    }

    let (width, height) = mask.dimensions();
    let sums = SummedArea::new(mask);

    Ok(BinaryMask::from_fn(width, height, |x, y| {
        if mask.get(x, y) {
            return false;
        }
        let x0 = x.saturating_sub(thickness);
        let y0 = y.saturating_sub(thickness);
        let x1 = x.saturating_add(thickness).min(width - 1);
        let y1 = y.saturating_add(thickness).min(height - 1);
        sums.count(x0, y0, x1, y1) > 0
    }))
}
