//! CLI entry point for grading tangram captures and generating outline assets

use clap::Parser;
use silhouette_grader::io::cli::{Cli, FileProcessor};

// The grading report is the command's output
#[allow(clippy::print_stdout)]
fn main() -> silhouette_grader::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    let mut processor = FileProcessor::new(cli);
    if let Some(summary) = processor.process()? {
        for line in summary.lines() {
            println!("{line}");
        }
    }

    Ok(())
}
