//! Injected rasterization capability
//!
//! The engine never renders puzzle pieces itself. Whatever owns the scene
//! implements [`Rasterize`] and hands the grader a finished frame, which keeps
//! the matching pipeline free of any rendering dependency.

use crate::io::error::Result;
use crate::raster::buffer::PixelBuffer;

/// Renders the current piece arrangement into a pixel buffer
///
/// The arrangement must be drawn over a black or transparent backdrop so
/// that only piece pixels survive binarization. A call must return a
/// completed frame; grading starts only after it returns.
pub trait Rasterize {
    /// Capture one frame of the current arrangement
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be produced
    fn rasterize(&mut self) -> Result<PixelBuffer>;
}

impl<F> Rasterize for F
where
    F: FnMut() -> Result<PixelBuffer>,
{
    fn rasterize(&mut self) -> Result<PixelBuffer> {
        self()
    }
}

/// A frame captured ahead of time, replayed on every call
#[derive(Debug, Clone)]
pub struct CapturedFrame(pub PixelBuffer);

impl Rasterize for CapturedFrame {
    fn rasterize(&mut self) -> Result<PixelBuffer> {
        Ok(self.0.clone())
    }
}
