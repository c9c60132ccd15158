// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! Error types for the renderer.

use std::fmt;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Main error type for the pose-render library.
#[derive(Debug)]
pub enum RenderError {
    /// Caller-supplied buffers are inconsistent (wrong length, mismatched
    /// person counts, bad keypoint stride).
    InvalidArgument(String),
    /// Error decoding, encoding, or converting images.
    ImageError(String),
    /// Invalid render configuration.
    ConfigError(String),
    /// Error loading or parsing a label font.
    FontError(String),
    /// Error parsing a pose file.
    PoseFileError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::PoseFileError(msg) => write!(f, "Pose file error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::InvalidArgument("test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = RenderError::ImageError("test".to_string());
        assert_eq!(err.to_string(), "Image error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err = RenderError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
    }
}
