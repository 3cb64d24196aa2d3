//! Error types and context management for grading operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grading operations
#[derive(Debug)]
pub enum GraderError {
    /// Caller contract violation
    ///
    /// Raised for mask or buffer dimension mismatches, malformed sample data,
    /// an outline thickness below one and thresholds outside `[0, 1]`. These
    /// point at a content or configuration bug rather than a transient failure.
    InvalidInput {
        /// Name of the offending argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GraderError {
    /// Whether this error is a caller contract violation
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid input '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GraderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidInput { .. } => None,
        }
    }
}

/// Convenience type alias for grading results
pub type Result<T> = std::result::Result<T, GraderError>;

/// Additional context to enrich I/O error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation was working on
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches converted errors with the file and operation they came from
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GraderError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                GraderError::ImageLoad { path, .. } | GraderError::ImageExport { path, .. } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                }
                GraderError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                // Argument errors already name their parameter
                GraderError::InvalidInput { .. } => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for GraderError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GraderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GraderError {
    GraderError::InvalidInput {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error for two masks that cannot be compared
pub fn dimension_mismatch(
    parameter: &'static str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> GraderError {
    GraderError::InvalidInput {
        parameter,
        value: format!("{}x{}", actual.0, actual.1),
        reason: format!("expected dimensions {}x{}", expected.0, expected.1),
    }
}
