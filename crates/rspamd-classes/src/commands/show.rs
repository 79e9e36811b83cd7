//! Print class lists

use anyhow::Result;
use rspamd_classes_store::SpamClass;
use std::path::Path;

use super::common::load_classes;

pub fn show(path: &Path, key: Option<&str>, json: bool) -> Result<()> {
    let mut store = load_classes(path)?;

    if let Some(key) = key {
        let classes = store.get_classes(key);
        if json {
            println!("{}", serde_json::to_string_pretty(classes)?);
        } else {
            print_classes(key, classes);
        }
        return Ok(());
    }

    if json {
        println!("{}", store.to_json()?);
        return Ok(());
    }

    println!("Classes file: {:?}", path);
    for (key, classes) in store.iter() {
        println!();
        print_classes(key, classes);
    }

    Ok(())
}

fn print_classes(key: &str, classes: &[SpamClass]) {
    println!("{}:", key);
    for class in classes {
        println!("  {:<12} {}", class.name, class.score);
    }
}
