//! Configuration module

use crate::commands::process::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use autosemi_core::{ExecutionMode, TransformConfig};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Execution mode: sequential, parallel or adaptive
    pub execution_mode: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::default().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Line count at which adaptive mode goes parallel
    pub parallel_threshold_lines: usize,

    /// Lines per parallel work unit
    pub chunk_lines: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        let defaults = TransformConfig::default();
        Self {
            parallel_threshold_lines: defaults.parallel_threshold,
            chunk_lines: defaults.chunk_lines,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that enumerated and numeric values are usable
    pub fn validate(&self) -> Result<()> {
        self.execution_mode()?;
        self.output_format()?;
        self.transform_config()?;
        Ok(())
    }

    /// Parsed execution mode
    pub fn execution_mode(&self) -> Result<ExecutionMode> {
        self.processing
            .execution_mode
            .parse::<ExecutionMode>()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Parsed default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text or json)",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Transformer configuration described by this file
    pub fn transform_config(&self) -> Result<TransformConfig> {
        let threads = match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        };

        TransformConfig::builder()
            .execution_mode(self.execution_mode()?)
            .threads(threads)
            .parallel_threshold(self.performance.parallel_threshold_lines)
            .chunk_lines(self.performance.chunk_lines)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
