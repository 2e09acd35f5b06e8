//! Prelude module for convenient imports
//!
//! ```ignore
//! use gamesight::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Operations: `analyze_executable`, `find_best_executable`, `detect_anti_cheat`
//! - Scanners: `ExecutableFinder`, `AntiCheatScanner`, `ScanConfig`
//! - Results: `PeAnalysis`, `BestExecutable`, `Detection`, `AntiCheatReport`
//! - Error handling: `Error`, `Result`

pub use crate::anticheat::{
    AntiCheatReport, AntiCheatScanner, AntiCheatSummary, Detection, RiskLevel, SignatureCatalog,
    detect_anti_cheat,
};
pub use crate::config::ScanConfig;
pub use crate::discovery::{BestExecutable, ExecutableCandidate, ExecutableFinder, find_best_executable};
pub use crate::error::{Error, Result};
pub use crate::pe::{Architecture, PeAnalysis, analyze_executable};
