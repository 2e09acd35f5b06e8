//! Anticheat command implementation.

use std::path::Path;

use anyhow::Result;
use gamesight::{AntiCheatScanner, RiskLevel, ScanConfig};
use owo_colors::OwoColorize;

/// Run the anticheat command
pub fn run(root: &Path, config: ScanConfig, json: bool) -> Result<()> {
    let scanner = AntiCheatScanner::with_config(config);
    let report = scanner.scan(root);

    if json {
        return super::print_json(&serde_json::json!({
            "detections": report.detections,
            "summary": report.summary(),
        }));
    }

    if !report.has_anti_cheat() {
        println!(
            "No anti-cheat detected under {} (depth {})",
            root.display(),
            scanner.config().max_depth
        );
        return Ok(());
    }

    for detection in &report.detections {
        let risk = detection.risk_level().to_string();
        let risk = match detection.risk_level() {
            RiskLevel::High => risk.red().to_string(),
            RiskLevel::Medium => risk.yellow().to_string(),
            RiskLevel::Low => risk.green().to_string(),
        };
        println!("{} [{}]", detection.name().bold(), risk);
        for file in &detection.matched_files {
            println!("    {}", file.display());
        }
    }

    if report.has_high_risk() {
        println!();
        println!("{}", "High-risk anti-cheat present".red().bold());
    }

    Ok(())
}
