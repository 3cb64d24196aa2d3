//! Per-capture verdict lines and batch summaries for the grading command

use crate::matching::validation::ValidationResult;
use std::path::{Path, PathBuf};

/// Verdict for one graded capture
#[derive(Debug, Clone)]
pub struct GradeRecord {
    /// Capture that was graded
    pub path: PathBuf,
    /// Pipeline outcome
    pub result: ValidationResult,
}

impl GradeRecord {
    /// One-line human-readable verdict
    pub fn line(&self) -> String {
        format!(
            "{} {}: iou {:.4} at offset {}",
            if self.result.success { "PASS" } else { "FAIL" },
            display_name(&self.path),
            self.result.score,
            self.result.offset
        )
    }
}

/// Collected verdicts for a batch of captures
#[derive(Debug, Clone, Default)]
pub struct GradeSummary {
    records: Vec<GradeRecord>,
    threshold: f64,
}

impl GradeSummary {
    /// Start an empty summary for captures graded against `threshold`
    pub const fn new(threshold: f64) -> Self {
        Self {
            records: Vec::new(),
            threshold,
        }
    }

    /// Add a verdict
    pub fn record(&mut self, path: &Path, result: ValidationResult) {
        self.records.push(GradeRecord {
            path: path.to_path_buf(),
            result,
        });
    }

    /// All verdicts in grading order
    pub fn records(&self) -> &[GradeRecord] {
        &self.records
    }

    /// Number of passing captures
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.result.success).count()
    }

    /// Number of failing captures
    pub fn failed(&self) -> usize {
        self.records.len() - self.passed()
    }

    /// Mean IoU over all captures, or `None` for an empty batch
    pub fn mean_score(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.result.score).sum();
        Some(total / self.records.len() as f64)
    }

    /// Closing line of the report
    pub fn summary_line(&self) -> String {
        match self.mean_score() {
            Some(mean) => format!(
                "{} passed, {} failed (threshold {:.4}, mean iou {mean:.4})",
                self.passed(),
                self.failed(),
                self.threshold
            ),
            None => "No captures graded".to_string(),
        }
    }

    /// Every verdict line followed by the summary line
    pub fn lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(GradeRecord::line)
            .chain(std::iter::once(self.summary_line()))
            .collect()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
