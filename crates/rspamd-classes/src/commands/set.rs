//! Add or update a threshold

use anyhow::Result;
use rspamd_classes_store::{MAX_NAME, MAX_THRESHOLD};
use std::path::Path;
use tracing::warn;

use super::common::{load_classes, save_classes};

pub fn set(path: &Path, key: &str, name: &str, score: f32, dry_run: bool) -> Result<()> {
    let mut store = load_classes(path)?;
    store.set_threshold(key, name, score);

    let expected = if name == MAX_NAME { MAX_THRESHOLD } else { score };
    match store.get_threshold(key, name) {
        Some(stored) if stored == expected => {}
        Some(stored) => warn!("{} for {} kept at {} (requested {})", name, key, stored, score),
        None if !score.is_finite() => {
            warn!("{}={} for {} was dropped: score must be finite", name, score, key)
        }
        None => warn!(
            "{}={} for {} was dropped: another class already uses that score",
            name, score, key
        ),
    }

    save_classes(&mut store, path, dry_run)
}
