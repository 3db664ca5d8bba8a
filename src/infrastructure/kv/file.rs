//! File-backed key-value store adapter

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::application::ports::KvStore;
use crate::domain::error::StorageError;

/// Key-value store persisting one JSON document per key under a config
/// directory, defaulting to the platform config dir.
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Create a store under the platform config directory
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("voicegate");
        Self { dir }
    }

    /// Create a store under a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the persisted documents
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        fs::write(self.path_for(key), value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Delete {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
