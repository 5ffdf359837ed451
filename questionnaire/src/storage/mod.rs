//! Storage backends for the catalog.

mod file;
pub use file::{FileStorage, FileStorageError};

mod memory;
pub use memory::{MemoryStorage, MemoryStorageError};
