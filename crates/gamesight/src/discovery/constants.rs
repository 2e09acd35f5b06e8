//! Search space and scoring weights for executable discovery
//!
//! # Scoring
//!
//! Every candidate starts at zero and collects independent bonuses:
//!
//! ```text
//!   location      root folder                         +10
//!   size          > 10 MiB  +5,  > 50 MiB  +5 more    +0..+10
//!   name          exactly game.exe / launcher.exe     +3
//!                 contains game / play / start        +2 / +2 / +1
//!                 contains _32 or x86                 -2
//!   architecture  x64 / x86 / unknown                 +3 / +1 / 0
//! ```
//!
//! The location and size bonuses dominate: a large binary sitting next to
//! the game's data is almost always the one the user launches.

/// Executable extension (compared case-insensitively)
pub const EXECUTABLE_EXTENSION: &str = "exe";

/// Folders searched for executables, in discovery order.
///
/// The empty entry is the game root itself.
pub const GAME_SUBFOLDERS: &[&str] = &[
    "", "bin", "Bin", "BIN", "binaries", "Binaries", "BINARIES", "bin64", "Bin64", "bin_x64",
    "bin32", "Bin32", "bin_x86", "win64", "Win64", "x64", "win32", "Win32", "x86", "game", "Game",
    "engine", "Engine", "retail", "Retail",
];

/// Lowercase name fragments of executables that are never the game
pub const SKIP_PATTERNS: &[&str] = &[
    "unins",
    "redist",
    "vcredist",
    "dxsetup",
    "directx",
    "crash",
    "report",
    "updater",
    "setup",
    "installer",
    "dotnet",
    "vc_redist",
    "oalinst",
    "physx",
    "easyanticheat",
    "battleye",
    "dxwebsetup",
    "support",
    "benchmark",
];

/// Generic launcher names that earn [`LAUNCHER_NAME_BONUS`]
pub const LAUNCHER_NAMES: &[&str] = &["game.exe", "launcher.exe"];

/// Name fragments hinting at a 32-bit build
pub const BITNESS_32_HINTS: &[&str] = &["_32", "x86"];

pub const MIB: u64 = 1024 * 1024;

/// First size threshold (10 MiB)
pub const LARGE_FILE_BYTES: u64 = 10 * MIB;
/// Second size threshold (50 MiB); stacks with the first
pub const HUGE_FILE_BYTES: u64 = 50 * MIB;

pub const ROOT_BONUS: i32 = 10;
pub const LARGE_FILE_BONUS: i32 = 5;
pub const HUGE_FILE_BONUS: i32 = 5;
pub const LAUNCHER_NAME_BONUS: i32 = 3;
pub const GAME_HINT_BONUS: i32 = 2;
pub const PLAY_HINT_BONUS: i32 = 2;
pub const START_HINT_BONUS: i32 = 1;
pub const BITNESS_32_PENALTY: i32 = -2;
pub const X64_BONUS: i32 = 3;
pub const X86_BONUS: i32 = 1;
