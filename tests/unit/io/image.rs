//! Tests for PNG loading into buffers and masks, and mask export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use silhouette_grader::GraderError;
    use silhouette_grader::io::image::{
        export_mask_as_png, load_mask, load_pixel_buffer, load_stage_target, mask_to_image,
    };
    use silhouette_grader::raster::BinaryMask;

    fn write_png(path: &std::path::Path, img: &RgbaImage) {
        img.save(path).unwrap();
    }

    // Tests a decoded PNG keeps dimensions and samples
    // Verified by transposing the decoded buffer
    #[test]
    fn test_load_pixel_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 0]));
        write_png(&path, &img);

        let buffer = load_pixel_buffer(&path).unwrap();

        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.pixel(2, 1), Some([10, 20, 30, 0]));
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    // Tests a missing file reports the path it tried
    // Verified by leaving the placeholder path in the error
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = load_pixel_buffer(&path).unwrap_err();

        match err {
            GraderError::ImageLoad { path: reported, .. } => assert_eq!(reported, path),
            other => unreachable!("Expected ImageLoad error, got {other}"),
        }
    }

    // Tests target masks treat only true black as background
    // Verified by treating transparent pixels as background
    #[test]
    fn test_load_mask_binarizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.png");
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 3, Rgba([1, 0, 0, 0]));
        write_png(&path, &img);

        let mask = load_mask(&path).unwrap();

        assert_eq!(mask.occupied().collect::<Vec<_>>(), vec![(1, 1), (2, 3)]);
    }

    // Tests stage loading validates the threshold
    // Verified by skipping the threshold check
    #[test]
    fn test_load_stage_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stage.png");
        write_png(&path, &RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])));

        let stage = load_stage_target(&path, 0.7).unwrap();
        assert_eq!(stage.mask().occupied_count(), 4);
        assert!((stage.iou_threshold() - 0.7).abs() < f64::EPSILON);

        assert!(load_stage_target(&path, 1.5).is_err_and(|e| e.is_invalid_input()));
    }

    // Tests mask rendering uses the colour on a transparent background
    // Verified by rendering background as opaque black
    #[test]
    fn test_mask_to_image() {
        let mask = BinaryMask::from_points(2, 1, &[(1, 0)]);
        let img = mask_to_image(&mask, [255, 255, 255, 255]);

        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
    }

    // Tests exported masks round-trip through the loader
    // Verified by disabling file save operation
    #[test]
    fn test_export_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets").join("outline.png");
        let mask = BinaryMask::from_points(5, 5, &[(0, 0), (4, 2)]);

        export_mask_as_png(&mask, [255, 255, 255, 255], &path).unwrap();

        assert!(path.exists(), "PNG file should be created");
        assert_eq!(load_mask(&path).unwrap(), mask);
    }

    // Tests zero-sized masks cannot be exported
    // Verified by ignoring empty mask check
    #[test]
    fn test_export_zero_sized_mask() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let result = export_mask_as_png(&BinaryMask::empty(0, 3), [255, 255, 255, 255], &path);

        assert!(result.is_err_and(|e| e.is_invalid_input()));
        assert!(!path.exists());
    }
}
