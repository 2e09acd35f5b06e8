use std::path::Path;

use serde::Serialize;

use super::constants::*;
use crate::pe::Architecture;

/// Static facts about a candidate that the score is computed from
#[derive(Debug, Clone, Copy)]
pub struct CandidateAttributes<'a> {
    /// File name as found on disk (any case)
    pub file_name: &'a str,
    /// Found directly in the game root rather than a subfolder
    pub in_root: bool,
    /// File size in bytes
    pub size: u64,
    pub architecture: Architecture,
}

/// Per-rule contributions to a candidate's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub location: i32,
    pub size: i32,
    pub launcher_name: i32,
    pub name_hints: i32,
    pub bitness_hint: i32,
    pub architecture: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.location
            + self.size
            + self.launcher_name
            + self.name_hints
            + self.bitness_hint
            + self.architecture
    }
}

impl CandidateAttributes<'_> {
    pub fn breakdown(&self) -> ScoreBreakdown {
        let name = self.file_name.to_lowercase();

        let location = if self.in_root { ROOT_BONUS } else { 0 };

        let mut size = 0;
        if self.size > LARGE_FILE_BYTES {
            size += LARGE_FILE_BONUS;
        }
        if self.size > HUGE_FILE_BYTES {
            size += HUGE_FILE_BONUS;
        }

        let launcher_name = if LAUNCHER_NAMES.contains(&name.as_str()) {
            LAUNCHER_NAME_BONUS
        } else {
            0
        };

        let mut name_hints = 0;
        if name.contains("game") {
            name_hints += GAME_HINT_BONUS;
        }
        if name.contains("play") {
            name_hints += PLAY_HINT_BONUS;
        }
        if name.contains("start") {
            name_hints += START_HINT_BONUS;
        }

        let bitness_hint = if BITNESS_32_HINTS.iter().any(|hint| name.contains(hint)) {
            BITNESS_32_PENALTY
        } else {
            0
        };

        let architecture = match self.architecture {
            Architecture::X64 => X64_BONUS,
            Architecture::X86 => X86_BONUS,
            Architecture::Unknown => 0,
        };

        ScoreBreakdown {
            location,
            size,
            launcher_name,
            name_hints,
            bitness_hint,
            architecture,
        }
    }

    pub fn score(&self) -> i32 {
        self.breakdown().total()
    }
}

/// Whether a lowercase file name matches the installer/redistributable deny-list
pub fn is_skipped_name(lower_name: &str) -> bool {
    SKIP_PATTERNS
        .iter()
        .any(|pattern| lower_name.contains(pattern))
}

pub fn has_executable_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(EXECUTABLE_EXTENSION))
}
