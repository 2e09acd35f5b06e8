use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::warn;

use crate::error::{Error, Result};

/// How likely an anti-cheat package is to block the game outside Windows
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiCheatSignature {
    pub name: String,
    pub risk_level: RiskLevel,
    /// File names that identify the package (matched case-insensitively)
    pub files: Vec<String>,
}

impl AntiCheatSignature {
    pub fn new<S: Into<String>>(name: S, risk_level: RiskLevel, files: &[&str]) -> Self {
        Self {
            name: name.into(),
            risk_level,
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}

/// Versioned table of signatures plus the directories the scanner never enters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureCatalog {
    pub version: String,
    pub signatures: Vec<AntiCheatSignature>,
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

pub const BUILTIN_CATALOG_VERSION: &str = "2026.1";

/// Directory names that never hold game binaries
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", ".git", "__pycache__", "logs", "saves"];

const BUILTIN_SIGNATURES: &[(&str, RiskLevel, &[&str])] = &[
    (
        "Easy Anti-Cheat",
        RiskLevel::High,
        &[
            "EasyAntiCheat.exe",
            "EasyAntiCheat_Setup.exe",
            "EasyAntiCheat_EOS.exe",
            "EasyAntiCheat_EOS_Setup.exe",
            "EasyAntiCheat_x64.dll",
            "EasyAntiCheat_x86.dll",
            "start_protected_game.exe",
        ],
    ),
    (
        "BattlEye",
        RiskLevel::High,
        &[
            "BEService.exe",
            "BEService_x64.exe",
            "BEClient.dll",
            "BEClient_x64.dll",
        ],
    ),
    (
        "Riot Vanguard",
        RiskLevel::High,
        &["vgk.sys", "vgc.exe", "vgtray.exe"],
    ),
    (
        "nProtect GameGuard",
        RiskLevel::High,
        &["GameGuard.des", "GameMon.des", "GameMon64.des", "npggNT.des"],
    ),
    (
        "XIGNCODE3",
        RiskLevel::High,
        &["xhunter1.sys", "x3.xem", "xcorona.xem", "xcorona_x64.xem"],
    ),
    (
        "mhyprot",
        RiskLevel::High,
        &["mhyprot2.sys", "mhyprot3.sys"],
    ),
    (
        "Denuvo Anti-Cheat",
        RiskLevel::Medium,
        &[
            "denuvo-anti-cheat.sys",
            "denuvo-anti-cheat-update-service.exe",
        ],
    ),
    (
        "PunkBuster",
        RiskLevel::Low,
        &["PnkBstrA.exe", "PnkBstrB.exe", "pbsvc.exe"],
    ),
];

fn default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect()
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SignatureCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_CATALOG_VERSION.to_string(),
            signatures: BUILTIN_SIGNATURES
                .iter()
                .map(|(name, risk, files)| AntiCheatSignature::new(*name, *risk, files))
                .collect(),
            skip_dirs: default_skip_dirs(),
        }
    }

    pub fn signature(&self, name: &str) -> Option<&AntiCheatSignature> {
        self.signatures
            .iter()
            .find(|signature| signature.name.eq_ignore_ascii_case(name))
    }

    /// Whether the scanner should stay out of a directory with this name
    pub fn is_skipped_dir(&self, dir_name: &str) -> bool {
        self.skip_dirs
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(dir_name))
    }

    pub fn validate(&self) -> Result<()> {
        if self.signatures.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no signatures".to_string()));
        }

        for signature in &self.signatures {
            if signature.name.trim().is_empty() {
                return Err(Error::InvalidCatalog("signature with empty name".to_string()));
            }
            if signature.files.iter().all(|f| f.trim().is_empty()) {
                return Err(Error::InvalidCatalog(format!(
                    "signature '{}' has no target files",
                    signature.name
                )));
            }
        }

        let mut seen = std::collections::HashMap::new();
        for signature in &self.signatures {
            for file in &signature.files {
                if let Some(other) = seen.insert(file.to_lowercase(), &signature.name) {
                    if other != &signature.name {
                        warn!(
                            "'{}' is a target of both '{}' and '{}'",
                            file, other, signature.name
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

/// Load and validate a catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<SignatureCatalog> {
    let content = fs::read_to_string(&path)?;
    let catalog: SignatureCatalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &SignatureCatalog) -> Result<()> {
    let content = serde_json::to_string_pretty(catalog)?;
    fs::write(path, content)?;
    Ok(())
}
