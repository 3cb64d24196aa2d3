//! Conversion of captured colour buffers into occupancy masks

use crate::raster::{BinaryMask, PixelBuffer};

/// Test whether a single RGBA sample belongs to the shape
///
/// Any sample whose red, green and blue channels do not all read zero counts
/// as shape, whatever its alpha. Anti-aliased edges in any tint therefore
/// register, and only true black is background.
pub const fn is_shape_sample(rgba: [u8; 4]) -> bool {
    let [r, g, b, _] = rgba;
    (r as u16 + g as u16 + b as u16) > 0
}

/// Binarize a buffer into a mask of the same dimensions
pub fn binarize(buffer: &PixelBuffer) -> BinaryMask {
    BinaryMask::from_fn(buffer.width(), buffer.height(), |x, y| {
        buffer.pixel(x, y).is_some_and(is_shape_sample)
    })
}
