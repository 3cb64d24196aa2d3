//! Command-line interface for grading captures and generating outline assets

use crate::io::configuration::{
    DEFAULT_IOU_THRESHOLD, DEFAULT_OUTLINE_THICKNESS, DEFAULT_SEARCH_RADIUS, OUTLINE_COLOR,
    OUTLINE_SUFFIX, OVERLAY_SUFFIX,
};
use crate::io::error::{GraderError, Result, WithContext, invalid_input};
use crate::io::image::{export_mask_as_png, load_mask, load_pixel_buffer, load_stage_target};
use crate::io::progress::{MARKER_DONE, MARKER_FAILED, ProgressManager};
use crate::io::report::GradeSummary;
use crate::io::visualization::export_overlay;
use crate::matching::binarize::binarize;
use crate::matching::outline::extract_outline;
use crate::matching::validation::{StageTarget, ValidationController, ValidationOptions};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "silhouette-grader")]
#[command(
    author,
    version,
    about = "Grade tangram captures against stage silhouettes and build outline assets"
)]
/// Command-line arguments for the grading tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging of every pipeline stage
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands of the grading tool
#[derive(Subcommand, Clone)]
pub enum Command {
    /// Grade captured arrangements against a stage target
    Grade {
        /// Stage target silhouette PNG
        #[arg(short, long, value_name = "PNG")]
        target: PathBuf,

        /// Capture PNG or directory of captures to grade
        #[arg(value_name = "CAPTURES")]
        captures: PathBuf,

        /// Minimum IoU for a capture to pass
        #[arg(long, default_value_t = DEFAULT_IOU_THRESHOLD)]
        threshold: f64,

        /// Pixels searched around the centroid alignment
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_RADIUS)]
        search_radius: usize,

        /// Write a diagnostic overlay next to each capture
        #[arg(short, long)]
        overlay: bool,
    },

    /// Generate outline assets from stage target silhouettes
    Outline {
        /// Target PNG or directory of targets
        #[arg(value_name = "TARGETS")]
        targets: PathBuf,

        /// Ring width in pixels
        #[arg(short, long, default_value_t = DEFAULT_OUTLINE_THICKNESS)]
        thickness: usize,

        /// Process files even if output exists
        #[arg(short, long)]
        no_skip: bool,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// Grading returns the batch summary; outline generation returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, loading, grading or export fails
    pub fn process(&mut self) -> Result<Option<GradeSummary>> {
        match self.cli.command.clone() {
            Command::Grade {
                target,
                captures,
                threshold,
                search_radius,
                overlay,
            } => {
                let stage = load_stage_target(&target, threshold)?;
                let controller = ValidationController::new(ValidationOptions { search_radius })?;
                let files = collect_pngs(&captures, |path| !is_same_file(path, &target))?;
                self.grade(&stage, controller, &files, overlay).map(Some)
            }
            Command::Outline {
                targets,
                thickness,
                no_skip,
            } => {
                if thickness < 1 {
                    return Err(invalid_input(
                        "thickness",
                        &thickness,
                        &"outline thickness must be at least 1",
                    ));
                }
                let files = collect_pngs(&targets, |path| {
                    !is_generated(path) && should_process_file(path, !no_skip)
                })?;
                self.outline(&files, thickness)?;
                Ok(None)
            }
        }
    }

    fn grade(
        &mut self,
        stage: &StageTarget,
        controller: ValidationController,
        files: &[PathBuf],
        overlay: bool,
    ) -> Result<GradeSummary> {
        let mut summary = GradeSummary::new(stage.iou_threshold());
        // Overlays written by an earlier run are not captures
        let captures: Vec<&PathBuf> = files.iter().filter(|path| !is_generated(path)).collect();

        self.begin(captures.len());
        for (index, path) in captures.into_iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, path);
            }

            let captured = load_pixel_buffer(path)?;
            let result = controller.validate(stage, &captured)?;
            log::info!(
                "graded {}: iou {:.4}, success {}",
                path.display(),
                result.score,
                result.success
            );

            if overlay {
                let candidate = binarize(&captured);
                export_overlay(
                    stage.mask(),
                    &candidate,
                    result.offset,
                    &derived_path(path, OVERLAY_SUFFIX),
                )?;
            }

            if let Some(ref mut pm) = self.progress_manager {
                let marker = if result.success {
                    MARKER_DONE
                } else {
                    MARKER_FAILED
                };
                pm.complete_file(index, marker, &format!("{:.4}", result.score));
            }
            summary.record(path, result);
        }
        self.end();

        Ok(summary)
    }

    fn outline(&mut self, files: &[PathBuf], thickness: usize) -> Result<()> {
        self.begin(files.len());
        for (index, path) in files.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, path);
            }

            let mask = load_mask(path)?;
            let ring = extract_outline(&mask, thickness)?;
            let output_path = derived_path(path, OUTLINE_SUFFIX);
            export_mask_as_png(&ring, OUTLINE_COLOR, &output_path)?;
            log::info!(
                "wrote {} ({} outline pixels)",
                output_path.display(),
                ring.occupied_count()
            );

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(index, MARKER_DONE, "");
            }
        }
        self.end();

        Ok(())
    }

    fn begin(&mut self, file_count: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(file_count);
        }
    }

    fn end(&self) {
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
    }
}

/// Collect PNG files from a single path or the top level of a directory
///
/// Directory entries are returned sorted so batches run in a stable order.
///
/// # Errors
///
/// Returns an error if the target is neither a PNG file nor a readable directory
pub fn collect_pngs(target: &Path, mut keep: impl FnMut(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if !is_png(target) {
            return Err(invalid_input(
                "target",
                &target.display(),
                &"target file must be a PNG image",
            ));
        }
        Ok(if keep(target) {
            vec![target.to_path_buf()]
        } else {
            vec![]
        })
    } else if target.is_dir() {
        let mut files = Vec::new();
        let entries = std::fs::read_dir(target).map_err(|e| GraderError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;
        for entry in entries {
            let path = entry.with_path(target)?.path();
            if is_png(&path) && keep(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_input(
            "target",
            &target.display(),
            &"target must be a PNG file or directory",
        ))
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Files this tool wrote itself carry one of its suffixes
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .is_some_and(|stem| stem.ends_with(OUTLINE_SUFFIX) || stem.ends_with(OVERLAY_SUFFIX))
}

// The stage target may sit in the capture directory
fn is_same_file(path: &Path, target: &Path) -> bool {
    let same = match (path.canonicalize(), target.canonicalize()) {
        (Ok(path), Ok(target)) => path == target,
        _ => path == target,
    };
    if same {
        log::debug!("Skipping: {} (stage target)", path.display());
    }
    same
}

fn should_process_file(input_path: &Path, skip_existing: bool) -> bool {
    if !skip_existing {
        return true;
    }

    let output_path = derived_path(input_path, OUTLINE_SUFFIX);
    if output_path.exists() {
        log::warn!("Skipping: {} (output exists)", input_path.display());
        false
    } else {
        true
    }
}

/// Sibling path of `input_path` with `suffix` appended to its stem
pub fn derived_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        suffix,
        extension.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
