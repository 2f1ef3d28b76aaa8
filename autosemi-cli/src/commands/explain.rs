//! Explain command implementation

use crate::input::resolve_inputs;
use anyhow::{Context, Result};
use autosemi_core::{terminated_lines, Decision};
use clap::Args;
use std::io::{self, Write};

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Input files or patterns (supports glob, `-` for stdin; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Only show lines that receive a terminator
    #[arg(short, long)]
    pub terminated_only: bool,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let sources = resolve_inputs(&self.input)?;
        let with_headers = sources.len() > 1;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (index, source) in sources.into_iter().enumerate() {
            let name = source.to_string();
            let text = source
                .into_input()
                .to_text()
                .with_context(|| format!("Failed to read {name}"))?;

            if with_headers {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "==> {name} <==")?;
            }
            self.write_report(&text, &mut out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write one row per line: number, rule (or `-`) and rendered line
    pub fn write_report<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        for (index, line) in terminated_lines(text).enumerate() {
            let rule = match line.decision {
                Decision::Terminate(reason) => reason.name(),
                Decision::PassThrough if self.terminated_only => continue,
                Decision::PassThrough => "-",
            };
            writeln!(out, "{:>5}  {:<22} {}", index + 1, rule, line)?;
        }
        Ok(())
    }
}
