//! Error types for qrbadge operations

use thiserror::Error;

/// Result type alias using qrbadge's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrbadge operations
#[derive(Error, Debug)]
pub enum Error {
    /// An input field was empty after trimming
    #[error("Missing field: {0} must not be empty")]
    MissingField(&'static str),

    /// The derived filename contains characters unsafe for the filesystem
    #[error("Invalid path component in derived filename: {0}")]
    InvalidPathComponent(String),

    /// QR code encoding failed (payload exceeds symbol capacity)
    #[error("Failed to encode QR code: {0}")]
    Encoding(String),

    /// I/O error while writing the artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image serialization error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
