//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune processing");
        println!("2. Validate your configuration:");
        println!("   autosemi validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   autosemi process -i main.go --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# autosemi configuration

[processing]
# How lines are dispatched to the classifier:
#   "sequential" - single-threaded pass
#   "parallel"   - always use the worker pool
#   "adaptive"   - parallel once the input reaches parallel_threshold_lines
execution_mode = "adaptive"

[output]
# Default output format when --format is not given: "text" or "json"
default_format = "text"

# Pretty print JSON output
pretty_json = true

[performance]
# Line count at which adaptive mode switches to parallel processing
parallel_threshold_lines = 10000

# Lines handed to a worker at a time
chunk_lines = 4096

# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#
    }
}
