//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-file runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    enabled: bool,
    terminated_lines: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter; a disabled reporter never draws
    pub fn new(enabled: bool) -> Self {
        Self {
            progress_bar: None,
            enabled,
            terminated_lines: 0,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if !self.enabled {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&mut self, filename: &str, terminated: usize) {
        self.terminated_lines += terminated;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} (+{terminated} terminators)"));
            pb.inc(1);
        }
    }

    /// Terminators inserted so far
    pub fn terminated_lines(&self) -> usize {
        self.terminated_lines
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "Complete: {} terminators inserted",
                self.terminated_lines
            ));
        }
    }
}
