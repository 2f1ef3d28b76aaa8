//! Text transformation
//!
//! Turns a whole text into its terminated form. Every input line produces
//! exactly one output line, in order, followed by a single `\n` whatever the
//! original line ending was.

use crate::{
    classifier::{decide, Decision, TERMINATOR},
    config::{ExecutionMode, TransformConfig},
    error::Result,
    input::Input,
    lines::{split_lines, Lines},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// A line paired with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminatedLine<'a> {
    /// Line text without its line break
    pub text: &'a str,
    /// Classifier decision for the line
    pub decision: Decision,
}

impl<'a> TerminatedLine<'a> {
    /// Whether a terminator will be appended
    pub fn is_terminated(&self) -> bool {
        self.decision.is_terminate()
    }

    /// Append the rendered line and its `\n` to `out`
    pub fn write_to(&self, out: &mut String) {
        out.push_str(self.text);
        if self.is_terminated() {
            out.push(TERMINATOR);
        }
        out.push('\n');
    }
}

/// Renders the line and optional terminator, without the line break
impl fmt::Display for TerminatedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)?;
        if self.is_terminated() {
            write!(f, "{TERMINATOR}")?;
        }
        Ok(())
    }
}

/// Classify a single line
pub fn terminate_line(line: &str) -> TerminatedLine<'_> {
    TerminatedLine {
        text: line,
        decision: decide(line),
    }
}

/// Lazy iterator over the terminated lines of a text
#[derive(Debug, Clone)]
pub struct TerminatedLines<'a> {
    lines: Lines<'a>,
}

impl<'a> Iterator for TerminatedLines<'a> {
    type Item = TerminatedLine<'a>;

    fn next(&mut self) -> Option<TerminatedLine<'a>> {
        self.lines.next().map(terminate_line)
    }
}

/// Lines of `text` with their classification, in input order
pub fn terminated_lines(text: &str) -> TerminatedLines<'_> {
    TerminatedLines {
        lines: split_lines(text),
    }
}

/// Insert terminators into `text`
pub fn transform(text: &str) -> String {
    render_lines(split_lines(text)).0
}

/// Counts collected while transforming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Number of lines seen
    pub lines: usize,
    /// Number of lines that received a terminator
    pub terminated: usize,
    /// Terminated lines per rule name
    pub by_rule: BTreeMap<&'static str, usize>,
}

impl TransformStats {
    /// Account for one classified line
    pub fn record(&mut self, decision: &Decision) {
        self.lines += 1;
        if let Some(reason) = decision.reason() {
            self.terminated += 1;
            *self.by_rule.entry(reason.name()).or_insert(0) += 1;
        }
    }

    /// Fold another set of counts into this one
    pub fn merge(&mut self, other: TransformStats) {
        self.lines += other.lines;
        self.terminated += other.terminated;
        for (rule, count) in other.by_rule {
            *self.by_rule.entry(rule).or_insert(0) += count;
        }
    }

    /// Number of lines left unchanged
    pub fn passed_through(&self) -> usize {
        self.lines - self.terminated
    }
}

/// Render a sequence of lines, collecting statistics on the way
pub(crate) fn render_lines<'a, I>(lines: I) -> (String, TransformStats)
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(terminate_line).fold(
        (String::new(), TransformStats::default()),
        |(mut out, mut stats), line| {
            line.write_to(&mut out);
            stats.record(&line.decision);
            (out, stats)
        },
    )
}

/// Result of a transformer run
#[derive(Debug, Clone)]
pub struct Output {
    /// Transformed text
    pub text: String,
    /// Line and rule counts
    pub stats: TransformStats,
    /// Execution details
    pub metadata: ProcessingMetadata,
}

/// Execution details for a run
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Mode that was actually used after resolving adaptive mode
    pub execution_mode: ExecutionMode,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
    /// Input size in bytes
    pub bytes_processed: usize,
}

/// Configured entry point for transforming whole inputs
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    /// Transformer with the default (adaptive) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Transformer with a custom configuration
    pub fn with_config(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Read the input to text and transform it
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.to_text()?;
        self.process_text(&text)
    }

    /// Transform text that is already in memory
    pub fn process_text(&self, text: &str) -> Result<Output> {
        let start = Instant::now();
        let lines: Vec<&str> = split_lines(text).collect();
        let mode = self.config.resolve_mode(lines.len());
        log::debug!(
            "transforming {} lines ({} bytes) in {} mode",
            lines.len(),
            text.len(),
            mode
        );

        let (rendered, stats, mode_used) = self.dispatch(&lines, mode)?;

        Ok(Output {
            text: rendered,
            stats,
            metadata: ProcessingMetadata {
                execution_mode: mode_used,
                processing_time_ms: elapsed_ms(start.elapsed()),
                bytes_processed: text.len(),
            },
        })
    }

    #[cfg(feature = "parallel")]
    fn dispatch(
        &self,
        lines: &[&str],
        mode: ExecutionMode,
    ) -> Result<(String, TransformStats, ExecutionMode)> {
        if mode == ExecutionMode::Parallel {
            let (text, stats) = crate::parallel::render_parallel(lines, &self.config)?;
            return Ok((text, stats, ExecutionMode::Parallel));
        }
        let (text, stats) = render_lines(lines.iter().copied());
        Ok((text, stats, ExecutionMode::Sequential))
    }

    #[cfg(not(feature = "parallel"))]
    fn dispatch(
        &self,
        lines: &[&str],
        mode: ExecutionMode,
    ) -> Result<(String, TransformStats, ExecutionMode)> {
        if mode == ExecutionMode::Parallel {
            log::debug!("parallel feature disabled, falling back to sequential");
        }
        let (text, stats) = render_lines(lines.iter().copied());
        Ok((text, stats, ExecutionMode::Sequential))
    }
}

fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
