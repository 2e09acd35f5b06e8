use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use super::constants::GAME_SUBFOLDERS;
use super::score::{
    CandidateAttributes, ScoreBreakdown, has_executable_extension, is_skipped_name,
};
use crate::pe::{Architecture, read_pe_header};

/// A scored executable found during one discovery pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableCandidate {
    /// Absolute path (game root joined with the relative path)
    pub path: PathBuf,
    pub name: String,
    /// Path relative to the game root
    pub relative_path: PathBuf,
    pub size: u64,
    pub architecture: Architecture,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
}

/// Best-ranked executable of a game directory.
///
/// `executable` is empty when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestExecutable {
    pub executable: String,
    pub architecture: Architecture,
}

impl BestExecutable {
    pub fn none() -> Self {
        Self {
            executable: String::new(),
            architecture: Architecture::Unknown,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.executable.is_empty()
    }
}

impl From<&ExecutableCandidate> for BestExecutable {
    fn from(candidate: &ExecutableCandidate) -> Self {
        Self {
            executable: candidate.relative_path.to_string_lossy().into_owned(),
            architecture: candidate.architecture,
        }
    }
}

/// File that passed the name and extension filters but is not yet scored
struct FileEntry {
    path: PathBuf,
    name: String,
    relative_path: PathBuf,
    in_root: bool,
    size: u64,
}

impl FileEntry {
    fn into_candidate(self) -> ExecutableCandidate {
        let architecture = read_pe_header(&self.path)
            .map(|header| header.architecture)
            .unwrap_or_default();

        let breakdown = CandidateAttributes {
            file_name: &self.name,
            in_root: self.in_root,
            size: self.size,
            architecture,
        }
        .breakdown();

        ExecutableCandidate {
            path: self.path,
            name: self.name,
            relative_path: self.relative_path,
            size: self.size,
            architecture,
            score: breakdown.total(),
            breakdown,
        }
    }
}

/// Locates and ranks the launchable executables of a game installation
#[derive(Debug, Clone)]
pub struct ExecutableFinder {
    subfolders: Vec<String>,
}

impl Default for ExecutableFinder {
    fn default() -> Self {
        Self::with_subfolders(GAME_SUBFOLDERS.iter().copied())
    }
}

impl ExecutableFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search a custom folder list (empty string = game root)
    pub fn with_subfolders<I, S>(subfolders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subfolders: subfolders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn subfolders(&self) -> &[String] {
        &self.subfolders
    }

    /// All candidates, best first.
    ///
    /// Equal scores keep discovery order: folders in list order, then file
    /// names within a folder.
    pub fn find_candidates(&self, game_root: &Path) -> Vec<ExecutableCandidate> {
        let game_root = std::path::absolute(game_root).unwrap_or_else(|_| game_root.to_path_buf());
        let entries = self.collect_entries(&game_root);

        #[cfg(feature = "parallel")]
        let mut candidates: Vec<ExecutableCandidate> = entries
            .into_par_iter()
            .map(FileEntry::into_candidate)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let mut candidates: Vec<ExecutableCandidate> =
            entries.into_iter().map(FileEntry::into_candidate).collect();

        // Stable: ties stay in discovery order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        for candidate in &candidates {
            trace!(
                "{} score={} ({:?}) arch={}",
                candidate.relative_path.display(),
                candidate.score,
                candidate.breakdown,
                candidate.architecture
            );
        }
        debug!(
            "Found {} executable candidates under {}",
            candidates.len(),
            game_root.display()
        );

        candidates
    }

    /// Relative paths of all candidates, best first
    pub fn find_executables(&self, game_root: &Path) -> Vec<String> {
        self.find_candidates(game_root)
            .iter()
            .map(|c| c.relative_path.to_string_lossy().into_owned())
            .collect()
    }

    pub fn find_best(&self, game_root: &Path) -> BestExecutable {
        self.find_candidates(game_root)
            .first()
            .map(BestExecutable::from)
            .unwrap_or_else(BestExecutable::none)
    }

    fn collect_entries(&self, game_root: &Path) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        let mut visited = HashSet::new();

        for subfolder in &self.subfolders {
            let in_root = subfolder.is_empty();
            let search_path = if in_root {
                game_root.to_path_buf()
            } else {
                game_root.join(subfolder)
            };

            if !search_path.is_dir() {
                continue;
            }

            // "bin" and "Bin" are the same folder on case-insensitive filesystems
            let canonical = fs::canonicalize(&search_path).unwrap_or_else(|_| search_path.clone());
            if !visited.insert(canonical) {
                debug!("Skipping already scanned folder {}", search_path.display());
                continue;
            }

            let read_dir = match fs::read_dir(&search_path) {
                Ok(r) => r,
                Err(e) => {
                    debug!("Cannot read {}: {}", search_path.display(), e);
                    continue;
                }
            };

            let mut found = Vec::new();
            for entry in read_dir {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        debug!("Skipping unreadable entry in {}: {}", search_path.display(), e);
                        continue;
                    }
                };

                let path = entry.path();
                if !has_executable_extension(&path) {
                    continue;
                }

                let metadata = match fs::metadata(&path) {
                    Ok(m) => m,
                    Err(e) => {
                        debug!("Cannot stat {}: {}", path.display(), e);
                        continue;
                    }
                };
                if !metadata.is_file() {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().into_owned();
                if is_skipped_name(&name.to_lowercase()) {
                    trace!("Skipping support binary {}", path.display());
                    continue;
                }

                let relative_path = if in_root {
                    PathBuf::from(&name)
                } else {
                    Path::new(subfolder).join(&name)
                };

                found.push(FileEntry {
                    path,
                    name,
                    relative_path,
                    in_root,
                    size: metadata.len(),
                });
            }

            found.sort_by(|a, b| a.name.cmp(&b.name));
            entries.extend(found);
        }

        entries
    }
}

/// Relative paths of plausible game executables under `game_root`, best first
pub fn find_game_executables<P: AsRef<Path>>(game_root: P) -> Vec<String> {
    ExecutableFinder::new().find_executables(game_root.as_ref())
}

/// The single best executable under `game_root` and its architecture
pub fn find_best_executable<P: AsRef<Path>>(game_root: P) -> BestExecutable {
    ExecutableFinder::new().find_best(game_root.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::constants::MIB;
    use crate::pe::mock::PeImageBuilder;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"not a PE image").unwrap();
    }

    #[test]
    fn test_root_launcher_beats_subfolder_build() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("bin64")).unwrap();

        PeImageBuilder::amd64()
            .write_sized(root.join("Launcher.exe"), 40 * MIB)
            .unwrap();
        PeImageBuilder::i386()
            .write_sized(root.join("bin64").join("Game_x86.exe"), 5 * MIB)
            .unwrap();

        let candidates = ExecutableFinder::new().find_candidates(root);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Launcher.exe");
        assert_eq!(candidates[0].score, 21);
        assert_eq!(candidates[1].relative_path, Path::new("bin64").join("Game_x86.exe"));
        assert_eq!(candidates[1].score, 1);

        let best = find_best_executable(root);
        assert_eq!(
            best,
            BestExecutable {
                executable: "Launcher.exe".to_string(),
                architecture: Architecture::X64,
            }
        );
    }

    #[test]
    fn test_breakdown_matches_score() {
        let dir = TempDir::new().unwrap();
        PeImageBuilder::amd64()
            .write_to(dir.path().join("PlayGame.exe"))
            .unwrap();

        let candidates = ExecutableFinder::new().find_candidates(dir.path());
        let c = &candidates[0];
        assert_eq!(c.breakdown.location, 10);
        assert_eq!(c.breakdown.name_hints, 4);
        assert_eq!(c.breakdown.architecture, 3);
        assert_eq!(c.score, c.breakdown.total());
        assert_eq!(c.path, dir.path().join("PlayGame.exe"));
    }

    #[test]
    fn test_skips_support_binaries_and_non_executables() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("unins000.exe"));
        touch(&root.join("vcredist_x64.exe"));
        touch(&root.join("UnityCrashHandler64.exe"));
        touch(&root.join("readme.txt"));
        touch(&root.join("game.dll"));
        fs::create_dir(root.join("folder.exe")).unwrap();
        touch(&root.join("Hollow.exe"));

        assert_eq!(find_game_executables(root), vec!["Hollow.exe".to_string()]);
    }

    #[test]
    fn test_non_pe_executable_is_still_a_candidate() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Game.exe"));

        let best = find_best_executable(dir.path());
        assert_eq!(best.executable, "Game.exe");
        assert_eq!(best.architecture, Architecture::Unknown);
    }

    #[test]
    fn test_subfolders_are_not_recursive() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("bin").join("deeper").join("Game.exe"));
        touch(&dir.path().join("data").join("Game.exe"));

        assert!(find_game_executables(dir.path()).is_empty());
    }

    #[test]
    fn test_empty_and_missing_roots() {
        let dir = TempDir::new().unwrap();
        assert!(find_game_executables(dir.path()).is_empty());

        let best = find_best_executable(dir.path().join("missing"));
        assert_eq!(best, BestExecutable::none());
        assert!(!best.is_found());
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("game").join("alpha.exe"));
        touch(&root.join("bin").join("zeta.exe"));
        touch(&root.join("bin").join("omega.exe"));

        let found = find_game_executables(root);
        assert_eq!(
            found,
            vec![
                Path::new("bin").join("omega.exe").to_string_lossy().into_owned(),
                Path::new("bin").join("zeta.exe").to_string_lossy().into_owned(),
                Path::new("game").join("alpha.exe").to_string_lossy().into_owned(),
            ]
        );
    }

    #[test]
    fn test_higher_score_wins_across_folders() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("tool.exe"));
        PeImageBuilder::amd64()
            .write_sized(root.join("Binaries").join("Shipping.exe"), 60 * MIB)
            .unwrap();

        // 10 (root) vs 10 (size) + 3 (x64)
        let found = find_game_executables(root);
        assert_eq!(found[0], Path::new("Binaries").join("Shipping.exe").to_string_lossy());
        assert_eq!(found[1], "tool.exe");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_folder_and_file_skipped() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        // "game" cannot be listed, bin/Broken.exe cannot be stat'ed
        symlink(root.join("nowhere"), root.join("game")).unwrap();
        fs::create_dir(root.join("bin")).unwrap();
        symlink(root.join("missing.exe"), root.join("bin").join("Broken.exe")).unwrap();
        touch(&root.join("bin").join("Game.exe"));

        assert_eq!(
            find_game_executables(root),
            vec![Path::new("bin").join("Game.exe").to_string_lossy().into_owned()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_aliased_folder_scanned_once() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("bin").join("Game.exe"));
        std::os::unix::fs::symlink(root.join("bin"), root.join("Bin")).unwrap();

        let found = find_game_executables(root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], Path::new("bin").join("Game.exe").to_string_lossy());
    }

    #[test]
    fn test_custom_subfolders() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Game.exe"));
        touch(&dir.path().join("app").join("Main.exe"));

        let finder = ExecutableFinder::with_subfolders(["app"]);
        assert_eq!(finder.subfolders(), &["app".to_string()]);
        assert_eq!(
            finder.find_executables(dir.path()),
            vec![Path::new("app").join("Main.exe").to_string_lossy().into_owned()]
        );
    }

    #[test]
    fn test_best_executable_json_shape() {
        let json = serde_json::to_value(BestExecutable::none()).unwrap();
        assert_eq!(json["executable"], "");
        assert_eq!(json["architecture"], "unknown");
    }
}
