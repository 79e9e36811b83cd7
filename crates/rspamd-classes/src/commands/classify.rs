//! Classify a score

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use super::common::load_classes;

pub fn classify(path: &Path, keys: &[String], score: f32) -> Result<()> {
    let mut store = load_classes(path)?;
    let class = store.get_class(keys, score);
    debug!("Score {} for {:?} classified as {}", score, keys, class);
    println!("{}", class);
    Ok(())
}
