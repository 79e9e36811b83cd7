//! Print a single threshold

use anyhow::Result;
use std::path::Path;

use super::common::load_classes;

pub fn get(path: &Path, key: &str, name: &str) -> Result<()> {
    let mut store = load_classes(path)?;
    match store.get_threshold(key, name) {
        Some(score) => {
            println!("{}", score);
            Ok(())
        }
        None => anyhow::bail!("No class '{}' for {}", name, key),
    }
}
