//! Analyze command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use gamesight::{PeAnalysis, analyze_executable};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct FileAnalysis<'a> {
    path: &'a Path,
    #[serde(flatten)]
    analysis: PeAnalysis,
}

/// Run the analyze command
pub fn run(files: &[PathBuf], json: bool) -> Result<()> {
    let results: Vec<FileAnalysis> = files
        .iter()
        .map(|path| FileAnalysis {
            path,
            analysis: analyze_executable(path),
        })
        .collect();

    if json {
        return super::print_json(&results);
    }

    for result in &results {
        let analysis = &result.analysis;
        if analysis.valid {
            let label = analysis.architecture.label();
            let label = if analysis.architecture.is_known() {
                label.green().to_string()
            } else {
                label.yellow().to_string()
            };
            println!(
                "{}: {} (machine 0x{:04X})",
                result.path.display(),
                label,
                analysis.machine_type
            );
        } else {
            println!(
                "{}: {} ({})",
                result.path.display(),
                "invalid".red(),
                analysis.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
