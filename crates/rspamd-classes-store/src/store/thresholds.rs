//! Single-threshold edits.

use super::SpamClasses;
use crate::class::{MAX_NAME, MAX_THRESHOLD, SpamClass};
use tracing::debug;

impl SpamClasses {
    /// Insert or update the threshold `name` for `key`.
    ///
    /// The sentinel's score is always forced to [`MAX_THRESHOLD`]. A new key
    /// starts from an empty list, not from the defaults.
    pub fn set_threshold(&mut self, key: &str, name: &str, score: f32) {
        let score = if name == MAX_NAME { MAX_THRESHOLD } else { score };

        let list = self.classes.entry(key.to_string()).or_default();
        match list.iter().position(|class| class.name == name) {
            Some(index) => list[index].score = score,
            None => list.push(SpamClass::new(name, score)),
        }
        debug!("Set threshold {}={} for {}", name, score, key);

        self.validate(key);
    }

    /// Look up the threshold `name` for `key`, provisioning `key` like
    /// [`get_classes`](Self::get_classes) does.
    pub fn get_threshold(&mut self, key: &str, name: &str) -> Option<f32> {
        self.get_classes(key)
            .iter()
            .find(|class| class.name == name)
            .map(|class| class.score)
    }

    /// Remove the threshold `name` from `key`.
    ///
    /// The sentinel stays while any other class remains. Removing the last
    /// entry removes `key` altogether.
    pub fn delete_class(&mut self, key: &str, name: &str) {
        let Some(list) = self.classes.get_mut(key) else {
            return;
        };

        if name == MAX_NAME && list.iter().any(|class| !class.is_sentinel()) {
            debug!("Refusing to delete {} from {} while other classes remain", name, key);
            return;
        }

        let before = list.len();
        list.retain(|class| class.name != name);
        if list.len() == before {
            return;
        }

        if list.is_empty() {
            self.delete_classes(key);
        } else {
            debug!("Deleted class {} from {}", name, key);
            self.validate(key);
        }
    }
}
