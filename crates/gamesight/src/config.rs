//! Scan configuration
//!
//! ## Example
//!
//! ```ignore
//! use gamesight::{AntiCheatScanner, ScanConfig, load_catalog};
//!
//! let config = ScanConfig::builder()
//!     .max_depth(5)
//!     .catalog(load_catalog("signatures.json")?)
//!     .build();
//! let report = AntiCheatScanner::with_config(config).scan(game_root);
//! ```

use crate::anticheat::SignatureCatalog;

/// Default number of directory levels below the game root that are listed
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Configuration for the anti-cheat signature scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Deepest directory level that is listed (game root = 0)
    pub max_depth: usize,
    /// Descend into symlinked directories (loops are detected and skipped)
    pub follow_links: bool,
    pub catalog: SignatureCatalog,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
            catalog: SignatureCatalog::builtin(),
        }
    }
}

impl ScanConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    max_depth: Option<usize>,
    follow_links: Option<bool>,
    catalog: Option<SignatureCatalog>,
}

impl ScanConfigBuilder {
    /// Set the maximum directory depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable or disable following symlinked directories
    pub fn follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = Some(enabled);
        self
    }

    /// Replace the built-in signature catalog
    pub fn catalog(mut self, catalog: SignatureCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            max_depth: self.max_depth.unwrap_or(default.max_depth),
            follow_links: self.follow_links.unwrap_or(default.follow_links),
            catalog: self.catalog.unwrap_or(default.catalog),
        }
    }
}
