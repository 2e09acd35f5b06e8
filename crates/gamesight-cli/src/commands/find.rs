//! Find command implementation.

use std::path::Path;

use anyhow::Result;
use gamesight::{ExecutableFinder, find_best_executable};
use owo_colors::OwoColorize;
use tracing::warn;

/// Run the find command
pub fn run(root: &Path, all: bool, json: bool) -> Result<()> {
    if !root.is_dir() {
        warn!("{} is not a directory", root.display());
    }

    if all {
        let candidates = ExecutableFinder::new().find_candidates(root);
        if json {
            return super::print_json(&candidates);
        }

        if candidates.is_empty() {
            println!("No executable found under {}", root.display());
            return Ok(());
        }

        println!("{:>5}  {:<7}  {:>10}  PATH", "SCORE", "ARCH", "SIZE");
        for candidate in &candidates {
            println!(
                "{:>5}  {:<7}  {:>10}  {}",
                candidate.score,
                candidate.architecture.label(),
                candidate.size,
                candidate.relative_path.display()
            );
        }
        return Ok(());
    }

    let best = find_best_executable(root);
    if json {
        return super::print_json(&best);
    }

    if best.is_found() {
        println!("{} ({})", best.executable.bold(), best.architecture.label());
    } else {
        println!("No executable found under {}", root.display());
    }

    Ok(())
}
