//! # gamesight
//!
//! Inspection library for game installation directories.
//!
//! This crate provides:
//! - PE header parsing to classify executables as 32-bit or 64-bit
//! - Main executable discovery with heuristic ranking
//! - Anti-cheat detection against a versioned signature catalog
//!
//! Every scan operation is read-only and absorbs I/O and format errors: a
//! broken or hostile installation yields an "invalid" or empty result, never
//! an error.
//!
//! ## Feature Flags
//!
//! - `parallel`: Reads candidate PE headers on a rayon thread pool during
//!   discovery. Scores and ordering are identical to the sequential path.

pub mod anticheat;
pub mod config;
pub mod discovery;
pub mod error;
pub mod pe;
pub mod prelude;

pub use anticheat::{
    AntiCheatReport, AntiCheatScanner, AntiCheatSignature, AntiCheatSummary, Detection, RiskLevel,
    SignatureCatalog, anti_cheat_summary, detect_anti_cheat, has_high_risk_anti_cheat,
    load_catalog, save_catalog,
};
pub use config::{DEFAULT_MAX_DEPTH, ScanConfig, ScanConfigBuilder};
pub use discovery::{
    BestExecutable, CandidateAttributes, ExecutableCandidate, ExecutableFinder, ScoreBreakdown,
    find_best_executable, find_game_executables,
};
pub use error::{Error, Result};
pub use pe::{
    Architecture, HeaderError, PeAnalysis, PeHeader, analyze_executable, parse_pe_header,
    read_pe_header,
};
