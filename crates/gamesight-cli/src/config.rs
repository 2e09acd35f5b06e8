//! Optional TOML settings for the command-line tool.
//!
//! ```toml
//! max_depth = 4
//! follow_links = false
//! catalog = "/path/to/signatures.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gamesight::{ScanConfig, SignatureCatalog, load_catalog};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub catalog: Option<PathBuf>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Default)]
pub struct ScanOverrides {
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub catalog: Option<PathBuf>,
}

/// Load a catalog file given on the command line or in the config
pub fn load_catalog_file(path: &Path) -> Result<SignatureCatalog> {
    match load_catalog(path) {
        Ok(catalog) => Ok(catalog),
        Err(e) if e.is_not_found() => bail!("Catalog {} does not exist", path.display()),
        Err(e) => Err(e).with_context(|| format!("Failed to load catalog {}", path.display())),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamesight").join("config.toml"))
}

impl CliConfig {
    /// Load the explicit config file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::load_from_path(&path),
                _ => {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Merge file settings with command-line overrides
    pub fn scan_config(&self, overrides: ScanOverrides) -> Result<ScanConfig> {
        let mut builder = ScanConfig::builder();

        if let Some(depth) = overrides.max_depth.or(self.max_depth) {
            builder = builder.max_depth(depth);
        }
        if overrides.follow_links || self.follow_links.unwrap_or(false) {
            builder = builder.follow_links(true);
        }
        if let Some(path) = overrides.catalog.as_ref().or(self.catalog.as_ref()) {
            let catalog = load_catalog_file(path)?;
            debug!(
                "Using catalog version {} ({} signatures)",
                catalog.version,
                catalog.signatures.len()
            );
            builder = builder.catalog(catalog);
        }

        Ok(builder.build())
    }
}
