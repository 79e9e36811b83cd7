//! List keys in the classes file

use anyhow::Result;
use std::path::Path;

use super::common::load_classes;

pub fn users(path: &Path) -> Result<()> {
    let store = load_classes(path)?;
    for username in store.usernames() {
        println!("{}", username);
    }
    Ok(())
}
