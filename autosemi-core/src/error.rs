//! Error types for the transformation layer
//!
//! Classification itself is total and never fails. Errors only come from
//! reading input, decoding it, or setting up parallel execution.

use thiserror::Error;

/// Errors surfaced by the I/O and execution layers around the classifier
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading from a file or stream failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration values are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CoreError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CoreError::Encoding(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.go");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("missing.go"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bad = String::from_utf8(vec![0x66, 0x6f, 0xff]).unwrap_err();
        let err: CoreError = bad.into();
        assert!(matches!(err, CoreError::Encoding(_)));
        assert!(err.to_string().starts_with("encoding error:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CoreError::InvalidConfig("chunk_lines must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: chunk_lines must be positive"
        );
    }
}
