//! In-memory storage for tests and embedding.
//!
//! `MemoryStorage` keeps values in a map and can be told to fail reads or
//! writes, which makes the best-effort persistence path testable.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Intent, MemoryStorage, Store, StoreConfig};
//!
//! let mut store = Store::open(MemoryStorage::new(), StoreConfig::default()).unwrap();
//! store.dispatch(Intent::Save).unwrap();
//!
//! let stored = store.storage().value("list").unwrap();
//! assert!(stored.starts_with('['));
//! ```

use std::collections::HashMap;

use questionnaire_types::KeyValueStore;

/// A storage backend that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// Error type for MemoryStorage.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("Read of '{0}' refused")]
    ReadRefused(String),

    #[error("Write of '{0}' refused")]
    WriteRefused(String),
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Make every read fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Switch write failures on or off.
    pub fn set_failing_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Get the stored value for `key` without going through the trait.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStorage {
    type Error = MemoryStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.fail_reads {
            return Err(MemoryStorageError::ReadRefused(key.to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MemoryStorageError::WriteRefused(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
