//! Delete a class or a whole key

use anyhow::Result;
use std::path::Path;

use super::common::{load_classes, save_classes};

pub fn delete(path: &Path, key: &str, name: Option<&str>, dry_run: bool) -> Result<()> {
    let mut store = load_classes(path)?;

    if !store.contains(key) {
        anyhow::bail!("No classes for {} in {:?}", key, path);
    }

    match name {
        Some(name) => store.delete_class(key, name),
        None => store.delete_classes(key),
    }

    save_classes(&mut store, path, dry_run)
}
