//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|c| Ok((c.transform_config()?, c))) {
            Ok((transform, config)) => {
                println!("✓ Configuration is valid!");
                println!("  Execution mode: {}", transform.execution_mode);
                println!("  Output format: {}", config.output.default_format);
                println!(
                    "  Worker threads: {}",
                    transform
                        .threads
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "auto".to_string())
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
