//! Byte-level persistence for class files.
//!
//! The store does its own JSON (de)serialization; a [`ClassStorage`] only
//! moves bytes. A missing file is not an error: `read` returns `Ok(None)`.

use crate::error::{ClassesError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Permission bits for written class files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o660;

pub trait ClassStorage {
    /// Read the whole file, or `None` if it does not exist.
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Replace the file's content with `data`.
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// Local filesystem storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl ClassStorage for FsStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(data) => {
                debug!("Read {} bytes from {:?}", data.len(), path);
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No classes file at {:?}", path);
                Ok(None)
            }
            Err(source) => Err(ClassesError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        let to_write_error = |source: std::io::Error| ClassesError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(path).map_err(to_write_error)?;
        file.write_all(data).map_err(to_write_error)?;
        file.flush().map_err(to_write_error)?;

        debug!("Wrote {} bytes to {:?}", data.len(), path);
        Ok(())
    }
}

/// In-process storage keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing any previous content.
    pub fn insert(&self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), data.into());
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }
}

impl ClassStorage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        Ok(self
            .files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned())
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.insert(path, data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(FsStorage.read(&path).unwrap().is_none());
    }

    #[test]
    fn test_fs_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        FsStorage.write(&path, b"{}").unwrap();
        assert_eq!(FsStorage.read(&path).unwrap(), Some(b"{}".to_vec()));

        // Overwrite truncates
        FsStorage.write(&path, b"[]").unwrap();
        assert_eq!(FsStorage.read(&path).unwrap(), Some(b"[]".to_vec()));
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_write_sets_mode_on_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        FsStorage.write(&path, b"{}").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask may clear bits but never adds any
        assert_eq!(mode & !FILE_MODE, 0);
    }

    #[test]
    fn test_fs_read_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsStorage.read(dir.path()).unwrap_err();
        assert!(matches!(err, ClassesError::Read { .. }));
    }

    #[test]
    fn test_fs_write_into_missing_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/classes.json");
        let err = FsStorage.write(&path, b"{}").unwrap_err();
        assert!(matches!(err, ClassesError::Write { .. }));
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        let path = Path::new("classes.json");
        assert!(storage.read(path).unwrap().is_none());
        assert!(!storage.contains(path));

        storage.write(path, b"{}").unwrap();
        assert!(storage.contains(path));
        assert_eq!(storage.read(path).unwrap(), Some(b"{}".to_vec()));
    }
}
