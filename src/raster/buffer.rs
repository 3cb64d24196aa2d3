//! Immutable RGBA pixel buffers produced by the arrangement rasterizer

use crate::io::error::{Result, invalid_input};
use ndarray::Array2;

/// Number of channels per sample (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// Row-major grid of RGBA samples
///
/// Indexed as `(row, col)`, so rows stay contiguous in memory. Once built the
/// buffer cannot be modified; stages derive masks from it and drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Array2<[u8; 4]>,
}

impl PixelBuffer {
    /// Build a buffer from raw interleaved RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly `width * height * 4` bytes
    pub fn new(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|count| count.checked_mul(CHANNELS))
            .ok_or_else(|| {
                invalid_input(
                    "dimensions",
                    &format!("{width}x{height}"),
                    &"sample count overflows",
                )
            })?;

        if data.len() != expected {
            return Err(invalid_input(
                "data",
                &data.len(),
                &format!("expected {expected} bytes for a {width}x{height} RGBA buffer"),
            ));
        }

        let pixels: Vec<[u8; 4]> = data
            .chunks_exact(CHANNELS)
            .map(|chunk| {
                let mut rgba = [0; CHANNELS];
                rgba.copy_from_slice(chunk);
                rgba
            })
            .collect();

        Self::from_pixels(width, height, pixels)
    }

    /// Build a buffer from one `[r, g, b, a]` entry per pixel
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels` does not hold exactly `width * height` entries
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Result<Self> {
        let count = pixels.len();
        let samples = Array2::from_shape_vec((height, width), pixels).map_err(|e| {
            invalid_input(
                "pixels",
                &count,
                &format!("expected one sample per pixel of a {width}x{height} buffer ({e})"),
            )
        })?;

        Ok(Self { samples })
    }

    /// Build a buffer by evaluating `sample` at every `(x, y)`
    pub fn from_fn(
        width: usize,
        height: usize,
        mut sample: impl FnMut(usize, usize) -> [u8; 4],
    ) -> Self {
        Self {
            samples: Array2::from_shape_fn((height, width), |(y, x)| sample(x, y)),
        }
    }

    /// Build a buffer with every pixel set to `rgba`
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        Self {
            samples: Array2::from_elem((height, width), rgba),
        }
    }

    /// Convert a decoded 8-bit RGBA image
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_fn(width as usize, height as usize, |x, y| {
            img.get_pixel_checked(x as u32, y as u32)
                .map_or([0, 0, 0, 0], |pixel| pixel.0)
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Sample at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        self.samples.get((y, x)).copied()
    }

    /// Iterate `(x, y, rgba)` in row-major order
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, [u8; 4])> + '_ {
        self.samples
            .indexed_iter()
            .map(|((y, x), &rgba)| (x, y, rgba))
    }
}
