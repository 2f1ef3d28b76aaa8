//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("main.go".to_string());
        assert_eq!(error.to_string(), "File not found: main.go");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("src/[*.go".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: src/[*.go");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown output format 'xml'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown output format 'xml'"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("--in-place needs file inputs".to_string());
        assert_eq!(
            error.to_string(),
            "Processing error: --in-place needs file inputs"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: anyhow::Result<()> = Err(CliError::FileNotFound("a.go".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(path)) if path == "a.go"
        ));
    }
}
