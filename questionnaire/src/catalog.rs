//! The ordered list of committed questionnaires.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use questionnaire_types::{KeyValueStore, PersistenceError, Questionnaire, Status, StoreError};

use crate::Draft;

/// All saved and released questionnaires, in display order.
///
/// Entries are addressed by position. Removing an entry shifts every later
/// entry down by one, which silently retargets any draft that was opened on
/// one of those positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Questionnaire>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the catalog stored under `key`. A missing key yields an empty catalog.
    pub fn load<S: KeyValueStore>(storage: &S, key: &str) -> Result<Self, PersistenceError> {
        let catalog = match storage.get(key).map_err(PersistenceError::backend)? {
            Some(json) => Self::from_json(&json)?,
            None => Self::new(),
        };
        tracing::info!(key, entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Decode a catalog from its JSON array form.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(json).map_err(PersistenceError::Deserialization)
    }

    /// Encode the catalog as a JSON array.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string(self).map_err(PersistenceError::Serialization)
    }

    /// Commit the draft as an unreleased questionnaire. Returns the position written.
    pub fn save(&mut self, draft: &Draft) -> Result<usize, StoreError> {
        self.commit(draft, Status::Unreleased)
    }

    /// Commit the draft as a released questionnaire. Returns the position written.
    pub fn release(&mut self, draft: &Draft) -> Result<usize, StoreError> {
        self.commit(draft, Status::Released)
    }

    /// Delete the questionnaire at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Questionnaire, StoreError> {
        if index >= self.entries.len() {
            return Err(StoreError::out_of_range(
                "questionnaire",
                index,
                self.entries.len(),
            ));
        }
        let removed = self.entries.remove(index);
        tracing::debug!(index, title = %removed.title, "removed questionnaire");
        Ok(removed)
    }

    /// Get the questionnaire at `index`.
    pub fn get(&self, index: usize) -> Option<&Questionnaire> {
        self.entries.get(index)
    }

    /// Get an iterator over all questionnaires.
    pub fn iter(&self) -> std::slice::Iter<'_, Questionnaire> {
        self.entries.iter()
    }

    /// Get the questionnaires as a slice.
    pub fn as_slice(&self) -> &[Questionnaire] {
        &self.entries
    }

    /// Get the number of questionnaires.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn commit(&mut self, draft: &Draft, status: Status) -> Result<usize, StoreError> {
        let index = draft.source_index;
        let len = self.entries.len();
        if index > len {
            return Err(StoreError::out_of_range("questionnaire", index, len));
        }

        let snapshot = Questionnaire {
            title: draft.title.clone(),
            scheduled_at: draft.scheduled_at,
            status,
            questions: draft.questions.clone(),
        };

        if index == len {
            self.entries.push(snapshot);
        } else {
            self.entries[index] = snapshot;
        }
        tracing::debug!(index, ?status, title = %draft.title, "committed draft");
        Ok(index)
    }
}

impl From<Vec<Questionnaire>> for Catalog {
    fn from(entries: Vec<Questionnaire>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Questionnaire> for Catalog {
    fn from_iter<I: IntoIterator<Item = Questionnaire>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Catalog {
    type Output = Questionnaire;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Questionnaire;
    type IntoIter = std::slice::Iter<'a, Questionnaire>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
