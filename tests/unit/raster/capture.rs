//! Tests for the injected rasterizer capability

#[cfg(test)]
mod tests {
    use silhouette_grader::raster::{CapturedFrame, PixelBuffer, Rasterize};
    use silhouette_grader::{GraderError, Result};

    fn capture_twice(rasterizer: &mut impl Rasterize) -> Result<(PixelBuffer, PixelBuffer)> {
        Ok((rasterizer.rasterize()?, rasterizer.rasterize()?))
    }

    // Tests closures act as rasterizers and are invoked per capture
    // Verified by caching the first frame
    #[test]
    fn test_closure_rasterizer_runs_each_time() {
        let mut calls = 0u8;
        let mut rasterizer = || -> Result<PixelBuffer> {
            calls += 1;
            Ok(PixelBuffer::filled(1, 1, [calls, 0, 0, 255]))
        };

        let (first, second) = capture_twice(&mut rasterizer).unwrap();

        assert_eq!(first.pixel(0, 0), Some([1, 0, 0, 255]));
        assert_eq!(second.pixel(0, 0), Some([2, 0, 0, 255]));
    }

    // Tests a pre-captured frame is replayed unchanged
    // Verified by returning an empty buffer
    #[test]
    fn test_captured_frame_replays() {
        let frame = PixelBuffer::filled(3, 2, [5, 5, 5, 5]);
        let mut rasterizer = CapturedFrame(frame.clone());

        let (first, second) = capture_twice(&mut rasterizer).unwrap();

        assert_eq!(first, frame);
        assert_eq!(second, frame);
    }

    // Tests rasterizer failures propagate to the caller
    // Verified by swallowing the error
    #[test]
    fn test_rasterizer_error_propagates() {
        let mut rasterizer = || -> Result<PixelBuffer> {
            Err(GraderError::InvalidInput {
                parameter: "arrangement",
                value: String::new(),
                reason: "no pieces on screen".to_string(),
            })
        };

        let err = rasterizer.rasterize().unwrap_err();
        assert!(err.to_string().contains("no pieces on screen"));
    }
}
