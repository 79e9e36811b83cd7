//! Whole-list access and score classification.

use super::SpamClasses;
use super::validate::normalize;
use crate::class::{DEFAULT_KEY, SpamClass, default_classes};
use tracing::debug;

impl SpamClasses {
    /// Get the class list for `key`.
    ///
    /// If `key` has no list yet, a copy of the default list (or of the
    /// built-in defaults, if even that is missing) is stored under `key` and
    /// returned. Reading an unknown key therefore provisions it: it shows up
    /// in [`usernames`](Self::usernames) and is written out on the next save.
    /// Later changes to the new list never affect the default list.
    pub fn get_classes(&mut self, key: &str) -> &[SpamClass] {
        if !self.classes.contains_key(key) {
            let mut list = self
                .classes
                .get(DEFAULT_KEY)
                .cloned()
                .unwrap_or_else(default_classes);
            normalize(key, &mut list);
            debug!("Provisioned classes for {} from defaults", key);
            self.classes.insert(key.to_string(), list);
        }
        self.classes
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replace the list for `key` with a copy of `classes`, validate it and
    /// return the stored result.
    pub fn set_classes(&mut self, key: &str, classes: &[SpamClass]) -> &[SpamClass] {
        self.classes.insert(key.to_string(), classes.to_vec());
        self.validate(key);
        self.classes
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Classify `score` using the first of `keys` that has a list, falling
    /// back to the default list.
    ///
    /// Returns the name of the first class whose threshold is above `score`.
    /// A score below every threshold maps to the first class, and a score at
    /// or above the sentinel maps to the last one.
    pub fn get_class<S: AsRef<str>>(&mut self, keys: &[S], score: f32) -> String {
        let active: Option<&str> = keys
            .iter()
            .map(|key| key.as_ref())
            .find(|key| self.classes.contains_key(*key));

        let classes = match active {
            Some(key) => self
                .classes
                .get(key)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            None => self.get_classes(DEFAULT_KEY),
        };

        classify(classes, score).to_string()
    }

    /// Remove the whole list for `key`.
    pub fn delete_classes(&mut self, key: &str) {
        if self.classes.remove(key).is_some() {
            debug!("Deleted classes for {}", key);
        }
    }
}

fn classify(classes: &[SpamClass], score: f32) -> &str {
    let mut result = "";
    for class in classes {
        result = &class.name;
        if score < class.score {
            break;
        }
    }
    result
}
