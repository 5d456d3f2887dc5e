//! Error types for the placeholder renderer

use thiserror::Error;

/// Result type alias for rendering and serving operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or serving placeholders
#[derive(Error, Debug)]
pub enum Error {
    /// The canvas could not be created for the requested size
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The HTTP server could not be started
    #[error("Server error: {0}")]
    Server(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidDimensions { .. })
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_is_client_error() {
        let err = Error::InvalidDimensions { width: -5, height: 100 };
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid dimensions: -5x100");
        assert!(!Error::Encode("boom".into()).is_client_error());
    }
}
