//! Class list normalization.

use super::SpamClasses;
use crate::class::SpamClass;
use tracing::trace;

impl SpamClasses {
    /// Normalize the list under `key`. No-op if `key` is absent.
    pub fn validate(&mut self, key: &str) {
        if let Some(list) = self.classes.get_mut(key) {
            normalize(key, list);
        }
    }

    /// Normalize every stored list.
    pub fn validate_all(&mut self) {
        for (key, list) in self.classes.iter_mut() {
            normalize(key, list);
        }
    }
}

/// Entries are accepted in their original order; an entry is dropped if its
/// score is not finite, or if its name or its score was already accepted. The sentinel is accepted first, so
/// any `spam` entry and any other entry scored 999 are dropped. The result is
/// sorted ascending by score.
pub(super) fn normalize(key: &str, list: &mut Vec<SpamClass>) {
    let mut accepted = Vec::with_capacity(list.len() + 1);
    accepted.push(SpamClass::sentinel());

    for class in list.drain(..) {
        if !class.score.is_finite() {
            trace!("Dropping non-finite class {} from {}", class, key);
            continue;
        }
        let duplicate = accepted
            .iter()
            .any(|a| a.name == class.name || a.score == class.score);
        if duplicate {
            trace!("Dropping duplicate class {} from {}", class, key);
            continue;
        }
        accepted.push(class);
    }
    accepted.sort_by(|a, b| a.score.total_cmp(&b.score));

    *list = accepted;
}
