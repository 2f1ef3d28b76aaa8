//! Transformer configuration

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How lines are dispatched to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded forward pass
    Sequential,
    /// Chunks of lines classified on a thread pool
    Parallel,
    /// Parallel once the input reaches the configured line count
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            "adaptive" => Ok(ExecutionMode::Adaptive),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown execution mode '{other}' (expected sequential, parallel or adaptive)"
            ))),
        }
    }
}

/// Transformer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = one per CPU)
    pub threads: Option<usize>,
    /// Minimum line count for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Lines per parallel work unit
    pub chunk_lines: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 10_000,
            chunk_lines: 4_096,
        }
    }
}

impl TransformConfig {
    /// Always run the single-threaded pass
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Always dispatch to the thread pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Default::default()
        }
    }

    /// Start a builder from the defaults
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.chunk_lines == 0 {
            return Err(CoreError::InvalidConfig(
                "chunk_lines must be greater than zero".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(CoreError::InvalidConfig(
                "threads must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve adaptive mode against the number of lines in the input
    pub fn resolve_mode(&self, line_count: usize) -> ExecutionMode {
        match self.execution_mode {
            ExecutionMode::Adaptive if line_count >= self.parallel_threshold => {
                ExecutionMode::Parallel
            }
            ExecutionMode::Adaptive => ExecutionMode::Sequential,
            mode => mode,
        }
    }
}

/// Builder for [`TransformConfig`]
#[derive(Debug, Default)]
pub struct TransformConfigBuilder {
    config: TransformConfig,
}

impl TransformConfigBuilder {
    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in lines
    pub fn parallel_threshold(mut self, lines: usize) -> Self {
        self.config.parallel_threshold = lines;
        self
    }

    /// Set the number of lines per parallel work unit
    pub fn chunk_lines(mut self, lines: usize) -> Self {
        self.config.chunk_lines = lines;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<TransformConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.threads, None);
        assert_eq!(config.parallel_threshold, 10_000);
        assert_eq!(config.chunk_lines, 4_096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let sequential = TransformConfig::sequential();
        assert_eq!(sequential.execution_mode, ExecutionMode::Sequential);
        assert_eq!(sequential.threads, Some(1));

        let parallel = TransformConfig::parallel();
        assert_eq!(parallel.execution_mode, ExecutionMode::Parallel);
    }

    #[test]
    fn test_resolve_mode() {
        let config = TransformConfig::builder()
            .parallel_threshold(100)
            .build()
            .unwrap();
        assert_eq!(config.resolve_mode(99), ExecutionMode::Sequential);
        assert_eq!(config.resolve_mode(100), ExecutionMode::Parallel);

        let forced = TransformConfig::sequential();
        assert_eq!(forced.resolve_mode(1_000_000), ExecutionMode::Sequential);
        assert_eq!(TransformConfig::parallel().resolve_mode(0), ExecutionMode::Parallel);
    }

    #[test]
    fn test_builder_rejects_zero_values() {
        let err = TransformConfig::builder().chunk_lines(0).build().unwrap_err();
        assert!(err.to_string().contains("chunk_lines"));

        let err = TransformConfig::builder().threads(Some(0)).build().unwrap_err();
        assert!(err.to_string().contains("threads"));
    }

    #[test]
    fn test_execution_mode_from_str() {
        assert_eq!("parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Parallel);
        assert_eq!("Sequential".parse::<ExecutionMode>().unwrap(), ExecutionMode::Sequential);
        assert_eq!("ADAPTIVE".parse::<ExecutionMode>().unwrap(), ExecutionMode::Adaptive);
        assert!("streaming".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn test_execution_mode_serde() {
        let json = serde_json::to_string(&ExecutionMode::Parallel).unwrap();
        assert_eq!(json, "\"parallel\"");
        let mode: ExecutionMode = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(mode, ExecutionMode::Sequential);
    }
}
