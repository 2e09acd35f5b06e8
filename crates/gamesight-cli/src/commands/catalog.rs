//! Catalog command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use gamesight::{SignatureCatalog, save_catalog};

use crate::config::load_catalog_file;

/// Print the built-in catalog, or the one at `path`
pub fn show(path: Option<&Path>, json: bool) -> Result<()> {
    let catalog = match path {
        Some(path) => load_catalog_file(path)?,
        None => SignatureCatalog::builtin(),
    };

    if json {
        return super::print_json(&catalog);
    }

    println!("Catalog version: {}", catalog.version);
    println!();
    for signature in &catalog.signatures {
        println!("{} [{}]", signature.name, signature.risk_level);
        println!("    {}", signature.files.join(", "));
    }
    println!();
    println!("Skipped directories: {}", catalog.skip_dirs.join(", "));

    Ok(())
}

/// Write the built-in catalog to `path`
pub fn export(path: &Path) -> Result<()> {
    let catalog = SignatureCatalog::builtin();
    save_catalog(path, &catalog)
        .with_context(|| format!("Failed to write catalog {}", path.display()))?;
    println!(
        "Exported {} signatures (version {}) to {}",
        catalog.signatures.len(),
        catalog.version,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamesight::load_catalog;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        export(&path).unwrap();

        assert_eq!(load_catalog(&path).unwrap(), SignatureCatalog::builtin());
        show(Some(&path), true).unwrap();
    }

    #[test]
    fn test_show_missing_catalog_fails() {
        let dir = TempDir::new().unwrap();
        let err = show(Some(&dir.path().join("missing.json")), false).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
