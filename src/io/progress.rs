//! Batch progress display with a rolling window of recent file statuses

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch grading and outline export
///
/// A single bar tracks files processed; beneath it a fixed number of status
/// lines show the most recent files and their outcome.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    status_bars: Vec<ProgressBar>,
    /// Stores (`marker`, `filename`) for the rolling window display
    file_states: Vec<(&'static str, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("  {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Marker for a file still being processed
pub const MARKER_RUNNING: &str = "…";
/// Marker for a file that passed or was written
pub const MARKER_DONE: &str = "✓";
/// Marker for a file that failed grading
pub const MARKER_FAILED: &str = "✗";

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            status_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(STATUS_STYLE.clone());
            self.status_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show a file as in progress
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, ("", String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (MARKER_RUNNING, display_name);
        }
        self.update_bars();
    }

    /// Mark a file as finished with an outcome marker and advance the batch bar
    pub fn complete_file(&mut self, index: usize, marker: &'static str, detail: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = marker;
            if !detail.is_empty() {
                state.1 = format!("{} ({detail})", state.1);
            }
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the last N files that have been started
    fn update_bars(&self) {
        let active: Vec<&(&'static str, String)> = self
            .file_states
            .iter()
            .filter(|(_, name)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(self.status_bars.len());
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar, (marker, name)) in self.status_bars.iter().zip(visible.iter().copied()) {
            bar.set_prefix(*marker);
            bar.set_message(name.clone());
        }

        for bar in self.status_bars.iter().skip(visible.len()) {
            bar.set_prefix("");
            bar.set_message(String::new());
        }
    }
}
