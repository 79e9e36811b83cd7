//! Common utilities and constants for CLI commands

use anyhow::{Context, Result};
use rspamd_classes_store::SpamClasses;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default classes filename
pub const DEFAULT_CLASSES_FILE: &str = "rspamd_classes.json";

/// Returns the classes file path, using the provided path or defaulting to
/// `DEFAULT_CLASSES_FILE` in the current directory. Relative paths are
/// resolved against the current directory.
pub fn resolve_classes_path(file: Option<PathBuf>) -> Result<PathBuf> {
    let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_CLASSES_FILE));
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(cwd.join(path))
    }
}

/// Load the classes file, starting from the defaults if it does not exist.
pub fn load_classes(path: &Path) -> Result<SpamClasses> {
    SpamClasses::open(path).with_context(|| format!("Failed to load classes from {:?}", path))
}

/// Write the store back to `path`, or print it when `dry_run` is set.
pub fn save_classes(store: &mut SpamClasses, path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", store.to_json()?);
        return Ok(());
    }

    store
        .write(path)
        .with_context(|| format!("Failed to write classes to {:?}", path))?;
    info!("Updated {:?}", path);
    Ok(())
}
