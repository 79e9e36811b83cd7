//! Score class types and the built-in default thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the "ham" class.
pub const HAM_THRESHOLD: f32 = 0.0;

/// Upper bound of the "possible" class.
pub const POSSIBLE_THRESHOLD: f32 = 3.0;

/// Upper bound of the "probable" class.
pub const PROBABLE_THRESHOLD: f32 = 10.0;

/// Ceiling score, reserved for the [`MAX_NAME`] sentinel.
pub const MAX_THRESHOLD: f32 = 999.0;

/// Name of the sentinel class terminating every class list.
pub const MAX_NAME: &str = "spam";

/// Key of the class list used when no entity-specific list exists.
pub const DEFAULT_KEY: &str = "default";

/// A named score threshold.
///
/// A score is classified as `name` when it falls below `score` and at or
/// above the previous class's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamClass {
    pub name: String,
    pub score: f32,
}

impl SpamClass {
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// The terminal `spam=999` entry.
    pub fn sentinel() -> Self {
        Self::new(MAX_NAME, MAX_THRESHOLD)
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == MAX_NAME
    }
}

impl fmt::Display for SpamClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.score)
    }
}

/// Fresh copy of the built-in class list: ham=0, possible=3, probable=10, spam=999.
pub fn default_classes() -> Vec<SpamClass> {
    vec![
        SpamClass::new("ham", HAM_THRESHOLD),
        SpamClass::new("possible", POSSIBLE_THRESHOLD),
        SpamClass::new("probable", PROBABLE_THRESHOLD),
        SpamClass::sentinel(),
    ]
}
