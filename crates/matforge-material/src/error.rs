//! Error types for material assembly and packing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while assembling or packing materials.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// The input root directory is missing or unreadable.
    #[error("Input directory {path} is not readable: {source}")]
    InputDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode a source image.
    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding error while persisting the packed texture.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
