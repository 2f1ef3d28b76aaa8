//! CLI command implementations

use anyhow::Result;
use autosemi_core::{StructuralSuffix, TokenRule};
use clap::{Subcommand, ValueEnum};
use std::io::{self, Write};

pub mod explain;
pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert semicolons into source files or stdin
    Process(process::ProcessArgs),

    /// Show the decision and rule for every line
    Explain(explain::ExplainArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the termination rules in evaluation order
    Rules,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Rules => {
                writeln!(out, "Structural suffixes (checked on the raw line end):")?;
                for suffix in StructuralSuffix::ALL {
                    writeln!(
                        out,
                        "  {:<22} line ends with `{}`",
                        suffix.name(),
                        suffix.as_str()
                    )?;
                }
                writeln!(out)?;
                writeln!(out, "Trailing token rules:")?;
                for rule in TokenRule::ALL {
                    writeln!(out, "  {:<22} {}", rule.name(), rule.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in process::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        writeln!(
                            out,
                            "  {:<6} {}",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
