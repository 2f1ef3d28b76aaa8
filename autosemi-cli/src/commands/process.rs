//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use autosemi_core::{ExecutionMode, TransformConfig, Transformer};
use clap::Args;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rewrite each input file with its transformed text
    #[arg(long)]
    pub in_place: bool,

    /// Force parallel processing even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Transformed source text
    Text,
    /// JSON array of documents with statistics
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting semicolon insertion");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let transformer = Transformer::with_config(self.transform_config(&config)?)?;
        let sources = resolve_inputs(&self.input)?;
        log::info!("Resolved {} input(s)", sources.len());

        if self.in_place {
            return self.rewrite_in_place(&transformer, sources);
        }

        if let Some(output) = &self.output {
            check_output_not_an_input(output, &sources)?;
        }

        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?,
        };
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let mut progress = ProgressReporter::new(!self.quiet && sources.len() > 1);
        progress.init_files(sources.len() as u64);

        for source in sources {
            let name = source.to_string();
            let output = transformer
                .process(source.into_input())
                .with_context(|| format!("Failed to process {name}"))?;
            log::info!(
                "{name}: {} of {} lines terminated ({} mode, {:.2} ms)",
                output.stats.terminated,
                output.stats.lines,
                output.metadata.execution_mode,
                output.metadata.processing_time_ms
            );

            let terminated = output.stats.terminated;
            formatter.format_document(&name, output)?;
            progress.file_completed(&name, terminated);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Merge command-line overrides into the configured transformer settings
    pub fn transform_config(&self, config: &CliConfig) -> Result<TransformConfig> {
        let mut transform = config.transform_config()?;
        if self.parallel {
            transform.execution_mode = ExecutionMode::Parallel;
        }
        if self.threads.is_some() {
            transform.threads = self.threads;
        }
        transform
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(transform)
    }

    fn rewrite_in_place(&self, transformer: &Transformer, sources: Vec<InputSource>) -> Result<()> {
        if sources.contains(&InputSource::Stdin) {
            return Err(CliError::ProcessingError(
                "--in-place requires file inputs, not stdin".to_string(),
            )
            .into());
        }
        if self.format == Some(OutputFormat::Json) {
            return Err(CliError::ProcessingError(
                "--in-place only writes text output".to_string(),
            )
            .into());
        }

        let mut progress = ProgressReporter::new(!self.quiet && sources.len() > 1);
        progress.init_files(sources.len() as u64);

        for source in sources {
            let Some(path) = source.path().cloned() else {
                continue;
            };
            let name = source.to_string();
            let output = transformer
                .process(source.into_input())
                .with_context(|| format!("Failed to process {name}"))?;
            fs::write(&path, &output.text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            log::info!("Rewrote {name} ({} terminators)", output.stats.terminated);
            progress.file_completed(&name, output.stats.terminated);
        }

        progress.finish();
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Refuse an output path that names one of the inputs
///
/// The output file is created before inputs are read, so writing over an
/// input would truncate it first.
fn check_output_not_an_input(output: &Path, sources: &[InputSource]) -> Result<()> {
    let Ok(output) = fs::canonicalize(output) else {
        return Ok(());
    };
    for path in sources.iter().filter_map(InputSource::path) {
        if fs::canonicalize(path).is_ok_and(|input| input == output) {
            return Err(CliError::ProcessingError(format!(
                "output file {} is also an input; use --in-place to rewrite it",
                path.display()
            ))
            .into());
        }
    }
    Ok(())
}
