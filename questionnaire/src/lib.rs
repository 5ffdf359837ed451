//! # questionnaire
//!
//! Author questionnaires. Backend-agnostic.
//!
//! This crate holds the state of a questionnaire-authoring tool: the draft
//! currently being edited and the catalog of committed questionnaires. A UI
//! layer dispatches [`Intent`]s and renders whatever [`AppState`] results.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Intent, MemoryStorage, QuestionKind, Status, Store, StoreConfig};
//!
//! let mut store = Store::open(MemoryStorage::new(), StoreConfig::default()).unwrap();
//!
//! store.dispatch(Intent::BeginNew).unwrap();
//! store.dispatch(Intent::SetTitle { title: "Team lunch".into() }).unwrap();
//! store.dispatch(Intent::AddQuestion { kind: QuestionKind::SingleChoice }).unwrap();
//! store.dispatch(Intent::Save).unwrap();
//!
//! assert_eq!(store.catalog().len(), 1);
//! assert_eq!(store.catalog()[0].status, Status::Unreleased);
//! ```
//!
//! ## Components
//!
//! - [`Draft`] - the questionnaire being authored, with its text-editing cursor
//! - [`Catalog`] - the ordered list of committed questionnaires
//! - [`AppState::apply`] - the transition function over both
//! - [`Store`] - owns the state, performs storage writes and notifies subscribers
//!
//! ## Storage
//!
//! Storage backends implement [`KeyValueStore`]:
//! - [`MemoryStorage`] - in-memory, with switchable failures for tests
//! - [`FileStorage`] - one JSON file per key, written atomically

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::{DEFAULT_STORAGE_KEY, DEFAULT_TITLE, StoreConfig};

mod draft;
pub use draft::{Cursor, Draft, TextEditor};

mod intent;
pub use intent::{Direction, Intent};

mod state;
pub use state::{AppState, Effect};

mod storage;
pub use storage::{FileStorage, FileStorageError, MemoryStorage, MemoryStorageError};

mod store;
pub use store::Store;
