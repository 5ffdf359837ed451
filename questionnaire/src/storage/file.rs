//! File-backed storage: one JSON file per key.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use questionnaire_types::KeyValueStore;

/// A storage backend that keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

/// Error type for FileStorage.
#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("Storage key '{0}' is not a valid file name")]
    InvalidKey(String),

    #[error("Failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileStorage {
    /// Store files under `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file a key is stored in.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, FileStorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(FileStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStorage {
    type Error = FileStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FileStorageError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| FileStorageError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| FileStorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| FileStorageError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| FileStorageError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| FileStorageError::Io {
            operation: "rename",
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage file");
        Ok(())
    }
}
