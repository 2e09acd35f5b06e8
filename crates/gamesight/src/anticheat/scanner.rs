use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::signature::{AntiCheatSignature, RiskLevel, SignatureCatalog};
use crate::config::ScanConfig;

/// A signature with every file that matched it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    #[serde(flatten)]
    pub signature: AntiCheatSignature,
    pub matched_files: Vec<PathBuf>,
}

impl Detection {
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.signature.risk_level
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiCheatSummary {
    pub has_anti_cheat: bool,
    pub high_risk: bool,
    /// Names of the detected signatures, in catalog order
    pub detected: Vec<String>,
}

/// Result of one scan; detections are in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AntiCheatReport {
    pub detections: Vec<Detection>,
}

impl AntiCheatReport {
    pub fn has_anti_cheat(&self) -> bool {
        !self.detections.is_empty()
    }

    pub fn has_high_risk(&self) -> bool {
        self.detections.iter().any(|d| d.signature.is_high_risk())
    }

    pub fn names(&self) -> Vec<String> {
        self.detections.iter().map(|d| d.name().to_string()).collect()
    }

    pub fn summary(&self) -> AntiCheatSummary {
        AntiCheatSummary {
            has_anti_cheat: self.has_anti_cheat(),
            high_risk: self.has_high_risk(),
            detected: self.names(),
        }
    }

    pub fn into_detections(self) -> Vec<Detection> {
        self.detections
    }
}

/// Depth-bounded filename scan against a [`SignatureCatalog`]
#[derive(Debug, Clone, Default)]
pub struct AntiCheatScanner {
    config: ScanConfig,
}

impl AntiCheatScanner {
    /// Scanner with the built-in catalog and default depth
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn with_catalog(catalog: SignatureCatalog) -> Self {
        Self::with_config(ScanConfig::builder().catalog(catalog).build())
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SignatureCatalog {
        &self.config.catalog
    }

    /// Lowercase target file name -> indices of the signatures listing it
    fn target_index(&self) -> HashMap<String, Vec<usize>> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, signature) in self.catalog().signatures.iter().enumerate() {
            for file in &signature.files {
                let slot = index.entry(file.to_lowercase()).or_default();
                if !slot.contains(&i) {
                    slot.push(i);
                }
            }
        }
        index
    }

    /// Walk `game_root` and report every signature with at least one match.
    ///
    /// Unreadable directories and symlink loops are skipped; a missing root
    /// yields an empty report.
    pub fn scan(&self, game_root: &Path) -> AntiCheatReport {
        if !game_root.is_dir() {
            debug!("Scan root {} is not a directory", game_root.display());
            return AntiCheatReport::default();
        }

        let root = std::path::absolute(game_root).unwrap_or_else(|_| game_root.to_path_buf());
        let catalog = self.catalog();
        let index = self.target_index();
        let mut matches: Vec<Vec<PathBuf>> = vec![Vec::new(); catalog.signatures.len()];

        // Files live one level below the deepest listed directory
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(self.config.max_depth.saturating_add(1))
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && catalog.is_skipped_dir(&entry.file_name().to_string_lossy()))
            });

        let mut files_seen = 0usize;
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if let Some(ancestor) = e.loop_ancestor() {
                        debug!("Skipping symlink loop back to {}", ancestor.display());
                    } else {
                        debug!("Skipping unreadable entry: {}", e);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            files_seen += 1;

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if let Some(hits) = index.get(&name) {
                for &i in hits {
                    matches[i].push(entry.path().to_path_buf());
                }
            }
        }

        let detections: Vec<Detection> = catalog
            .signatures
            .iter()
            .zip(matches)
            .filter(|(_, files)| !files.is_empty())
            .map(|(signature, matched_files)| Detection {
                signature: signature.clone(),
                matched_files,
            })
            .collect();

        info!(
            "Anti-cheat scan of {}: {} files checked, {} signatures detected",
            root.display(),
            files_seen,
            detections.len()
        );

        AntiCheatReport { detections }
    }
}

/// Scan `game_root` with the built-in catalog
pub fn detect_anti_cheat<P: AsRef<Path>>(game_root: P) -> Vec<Detection> {
    AntiCheatScanner::new()
        .scan(game_root.as_ref())
        .into_detections()
}

pub fn has_high_risk_anti_cheat<P: AsRef<Path>>(game_root: P) -> bool {
    AntiCheatScanner::new().scan(game_root.as_ref()).has_high_risk()
}

pub fn anti_cheat_summary<P: AsRef<Path>>(game_root: P) -> AntiCheatSummary {
    AntiCheatScanner::new().scan(game_root.as_ref()).summary()
}
