//! Error types for loading and saving class lists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the persistence boundary. In-memory mutations never fail.
#[derive(Debug, Error)]
pub enum ClassesError {
    /// The file exists but could not be read.
    #[error("failed reading {}: {source}", display_path(Some(.path)))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a mapping of key to class list.
    #[error("failed parsing {}: {source}", display_path(.path.as_ref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The validated mapping could not be encoded.
    #[error("failed marshalling classes: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The file could not be written.
    #[error("failed writing {}: {source}", display_path(Some(.path)))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: Option<&PathBuf>) -> String {
    match path {
        Some(p) => format!("{:?}", p),
        None => "input".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ClassesError>;
