//! PNG loading into pixel buffers and export of masks as transparent PNGs

use crate::io::configuration::MAX_MASK_DIMENSION;
use crate::io::error::{GraderError, Result, WithContext, invalid_input};
use crate::matching::binarize::binarize;
use crate::matching::validation::StageTarget;
use crate::raster::{BinaryMask, PixelBuffer};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Decode an image file into an 8-bit RGBA pixel buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either dimension exceeds `MAX_MASK_DIMENSION`
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).with_path(path)?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    if width as usize > MAX_MASK_DIMENSION || height as usize > MAX_MASK_DIMENSION {
        return Err(invalid_input(
            "image",
            &format!("{width}x{height}"),
            &format!(
                "'{}' exceeds the maximum dimension of {MAX_MASK_DIMENSION}",
                path.display()
            ),
        ));
    }

    Ok(PixelBuffer::from_rgba_image(&rgba_img))
}

/// Decode an image file straight into an occupancy mask
///
/// # Errors
///
/// Returns an error if the image cannot be loaded
pub fn load_mask(path: &Path) -> Result<BinaryMask> {
    load_pixel_buffer(path).map(|buffer| binarize(&buffer))
}

/// Load a stage silhouette and pair it with its pass threshold
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or the threshold is outside `[0, 1]`
pub fn load_stage_target(path: &Path, iou_threshold: f64) -> Result<StageTarget> {
    StageTarget::new(load_mask(path)?, iou_threshold)
}

/// Render a mask with `color` on occupied pixels over a transparent background
pub fn mask_to_image(mask: &BinaryMask, color: [u8; 4]) -> RgbaImage {
    let (width, height) = mask.dimensions();
    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        if mask.get(x as usize, y as usize) {
            Rgba(color)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Write an image as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GraderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GraderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Export a mask as a PNG with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The mask has no pixels to write
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_mask_as_png(mask: &BinaryMask, color: [u8; 4], output_path: &Path) -> Result<()> {
    if mask.width() == 0 || mask.height() == 0 {
        return Err(invalid_input(
            "mask",
            &format!("{}x{}", mask.width(), mask.height()),
            &"cannot export a mask with no pixels",
        ));
    }

    save_png(&mask_to_image(mask, color), output_path)
}
