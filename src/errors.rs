//! Custom error types for icon splitting

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading, splitting or saving an icon sheet
#[derive(Debug)]
pub enum SplitError {
    /// I/O error
    IoError(io::Error),
    /// Source image could not be opened or decoded
    ImageError(image::ImageError),
    /// Output directory could not be created
    OutputDirectory { path: PathBuf, source: io::Error },
    /// A processed band could not be written
    WriteFailed { path: PathBuf, source: image::ImageError },
    /// Configuration file is unreadable or malformed
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::IoError(e) => write!(f, "I/O error: {}", e),
            SplitError::ImageError(e) => write!(f, "Image error: {}", e),
            SplitError::OutputDirectory { path, source } => {
                write!(f, "Cannot create output directory {}: {}", path.display(), source)
            }
            SplitError::WriteFailed { path, source } => {
                write!(f, "Failed to save {}: {}", path.display(), source)
            }
            SplitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SplitError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::IoError(e) => Some(e),
            SplitError::ImageError(e) => Some(e),
            SplitError::OutputDirectory { source, .. } => Some(source),
            SplitError::WriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::IoError(error)
    }
}

impl From<image::ImageError> for SplitError {
    fn from(error: image::ImageError) -> Self {
        SplitError::ImageError(error)
    }
}

impl From<String> for SplitError {
    fn from(msg: String) -> Self {
        SplitError::GenericError(msg)
    }
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;
