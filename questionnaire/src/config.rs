use serde::Deserialize;

use questionnaire_types::PersistenceError;

/// Storage key the catalog is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "list";

/// Title of a fresh draft unless configured otherwise.
pub const DEFAULT_TITLE: &str = "Untitled questionnaire";

/// Settings for a [`crate::Store`].
///
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Storage entry holding the serialized catalog.
    pub storage_key: String,

    /// Title given to a draft started with `BeginNew`.
    pub default_title: String,
}

impl StoreConfig {
    /// Read settings from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(json).map_err(PersistenceError::Deserialization)
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the title of fresh drafts.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}
