//! Per-entity score class storage.
//!
//! This module provides the `SpamClasses` type, which maps an entity key
//! (usually a recipient address, or [`DEFAULT_KEY`]) to a class list kept
//! sorted by score and terminated by the `spam=999` sentinel.
//!
//! The store is a plain in-memory value. It has no internal locking; callers
//! sharing it across threads should guard the whole store with one mutex,
//! since every mutation re-validates the affected list in several steps.

mod lookup;
mod thresholds;
mod validate;


use crate::class::{DEFAULT_KEY, SpamClass, default_classes};
use crate::error::{ClassesError, Result};
use crate::storage::{ClassStorage, FsStorage};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// Raw persisted shape: entity key to class list.
pub type ClassMap = BTreeMap<String, Vec<SpamClass>>;

#[derive(Debug, Clone, PartialEq)]
pub struct SpamClasses {
    classes: ClassMap,
}

impl Default for SpamClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl SpamClasses {
    /// Create a store holding only the built-in default list.
    pub fn new() -> Self {
        Self::from_map(ClassMap::new())
    }

    /// Create a store from already-decoded data.
    ///
    /// Every list is validated, and the default list is seeded if `raw` has none.
    pub fn from_map(raw: ClassMap) -> Self {
        let mut store = Self {
            classes: ClassMap::new(),
        };
        store.load(raw);
        store.ensure_default();
        store
    }

    /// Create a store from JSON content.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw = parse(data, None)?;
        Ok(Self::from_map(raw))
    }

    /// Load the store from `path` on the local filesystem.
    ///
    /// A missing file yields a fresh store.
    pub fn open(path: &Path) -> Result<Self> {
        Self::read_from(&FsStorage, path)
    }

    /// Load the store from `path` through `storage`.
    pub fn read_from(storage: &dyn ClassStorage, path: &Path) -> Result<Self> {
        let raw = match storage.read(path)? {
            Some(data) => parse(&data, Some(path))?,
            None => ClassMap::new(),
        };
        debug!("Loaded {} class lists from {:?}", raw.len(), path);
        Ok(Self::from_map(raw))
    }

    /// Replace every list with `raw`, then validate all of them.
    ///
    /// Unlike construction this does not re-seed the default list.
    pub fn load(&mut self, raw: ClassMap) {
        self.classes = raw;
        self.validate_all();
    }

    /// Parse `data` and load it. The store is untouched if parsing fails.
    pub fn load_json(&mut self, data: &[u8]) -> Result<()> {
        let raw = parse(data, None)?;
        self.load(raw);
        Ok(())
    }

    /// Validate every list and return the mapping ready for serialization.
    pub fn save(&mut self) -> &ClassMap {
        self.validate_all();
        &self.classes
    }

    /// Validate every list and encode the mapping as indented JSON.
    pub fn to_json(&mut self) -> Result<String> {
        serde_json::to_string_pretty(self.save()).map_err(ClassesError::Serialize)
    }

    /// Save the store to `path` on the local filesystem.
    pub fn write(&mut self, path: &Path) -> Result<()> {
        self.write_to(&FsStorage, path)
    }

    /// Save the store to `path` through `storage`.
    pub fn write_to(&mut self, storage: &dyn ClassStorage, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        storage.write(path, json.as_bytes())?;
        debug!("Saved {} class lists to {:?}", self.classes.len(), path);
        Ok(())
    }

    /// All entity keys currently stored.
    pub fn usernames(&self) -> BTreeSet<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over stored lists in key order without provisioning anything.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SpamClass])> {
        self.classes
            .iter()
            .map(|(key, list)| (key.as_str(), list.as_slice()))
    }

    fn ensure_default(&mut self) {
        if !self.classes.contains_key(DEFAULT_KEY) {
            self.classes
                .insert(DEFAULT_KEY.to_string(), default_classes());
            self.validate(DEFAULT_KEY);
        }
    }
}

fn parse(data: &[u8], path: Option<&Path>) -> Result<ClassMap> {
    serde_json::from_slice(data).map_err(|source| ClassesError::Parse {
        path: path.map(Path::to_path_buf),
        source,
    })
}
