/// Command-line interface and batch file processing
pub mod cli;
/// Grading constants and runtime defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// PNG loading and mask export
pub mod image;
/// Batch progress display
pub mod progress;
/// Per-capture verdicts and batch summaries
pub mod report;
/// Overlay rendering of aligned target and candidate masks
pub mod visualization;
