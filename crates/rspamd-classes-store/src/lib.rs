pub mod class;
pub mod error;
pub mod storage;
pub mod store;

pub use class::{
    DEFAULT_KEY, HAM_THRESHOLD, MAX_NAME, MAX_THRESHOLD, POSSIBLE_THRESHOLD, PROBABLE_THRESHOLD,
    SpamClass, default_classes,
};
pub use error::{ClassesError, Result};
pub use storage::{ClassStorage, FsStorage, MemoryStorage};
pub use store::{ClassMap, SpamClasses};
