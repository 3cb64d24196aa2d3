//! Tests for binary mask construction, signed sampling and bounds

#[cfg(test)]
mod tests {
    use silhouette_grader::raster::{BinaryMask, MaskBounds};

    // Tests points outside the mask are ignored during construction
    // Verified by wrapping out-of-range points
    #[test]
    fn test_from_points_ignores_out_of_range() {
        let mask = BinaryMask::from_points(3, 3, &[(0, 0), (2, 2), (3, 0), (0, 5)]);

        assert_eq!(mask.occupied_count(), 2);
        assert!(mask.get(0, 0));
        assert!(mask.get(2, 2));
        assert!(!mask.get(1, 1));
    }

    // Tests negative and past-the-end samples read as background
    // Verified by clamping signed coordinates to the edge
    #[test]
    fn test_sample_out_of_frame_is_background() {
        let mask = BinaryMask::full(2, 2);

        assert!(mask.sample(0, 0));
        assert!(mask.sample(1, 1));
        assert!(!mask.sample(-1, 0));
        assert!(!mask.sample(0, -1));
        assert!(!mask.sample(2, 0));
        assert!(!mask.sample(0, 2));
    }

    // Tests occupied iteration yields (x, y) in row-major order
    // Verified by swapping the index division
    #[test]
    fn test_occupied_coordinates() {
        let mask = BinaryMask::from_fn(3, 2, |x, y| (x + y) % 2 == 1);
        let points: Vec<(usize, usize)> = mask.occupied().collect();

        assert_eq!(points, vec![(1, 0), (0, 1), (2, 1)]);
    }

    // Tests bounds cover exactly the occupied pixels
    // Verified by returning the frame instead of the tight box
    #[test]
    fn test_bounds() {
        let mask = BinaryMask::from_points(6, 5, &[(1, 3), (4, 1), (2, 2)]);
        let bounds = mask.bounds().unwrap();

        assert_eq!(
            bounds,
            MaskBounds {
                min_x: 1,
                min_y: 1,
                max_x: 4,
                max_y: 3,
            }
        );
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 3);
    }

    // Tests empty masks report no bounds
    // Verified by returning a zero-sized box
    #[test]
    fn test_bounds_empty() {
        let mask = BinaryMask::empty(4, 4);

        assert!(mask.is_empty());
        assert!(mask.bounds().is_none());
    }

    // Tests dimension mismatch is reported as invalid input
    // Verified by comparing only the total pixel count
    #[test]
    fn test_ensure_same_dimensions() {
        let a = BinaryMask::empty(4, 2);
        let b = BinaryMask::empty(2, 4);
        let c = BinaryMask::full(4, 2);

        assert!(a.ensure_same_dimensions(&c, "candidate").is_ok());
        let err = a.ensure_same_dimensions(&b, "candidate").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("2x4"));
        assert!(err.to_string().contains("4x2"));
    }

    // Tests debug output draws the occupancy grid
    // Verified by printing only the summary line
    #[test]
    fn test_debug_draws_grid() {
        let mask = BinaryMask::from_points(2, 2, &[(1, 0)]);
        let rendered = format!("{mask:?}");

        assert!(rendered.contains("2x2, 1 occupied"));
        assert!(rendered.contains(".#\n..\n"));
    }
}
