//! The driver that owns the state and talks to storage.

use std::fmt;

use questionnaire_types::{KeyValueStore, PersistenceError, StoreError};

use crate::{AppState, Catalog, Draft, Effect, Intent, StoreConfig};

type Listener = Box<dyn FnMut(&AppState)>;

/// Owns the [`AppState`], applies intents one at a time and performs the
/// storage writes they request.
///
/// Storage writes are best-effort: a failed write is reported to the caller
/// but the in-memory commit stays, and nothing is retried.
pub struct Store<S> {
    state: AppState,
    storage: S,
    config: StoreConfig,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> Store<S> {
    /// Read the catalog from `storage` and start with a blank draft.
    pub fn open(storage: S, config: StoreConfig) -> Result<Self, StoreError> {
        let catalog = Catalog::load(&storage, &config.storage_key)?;
        Ok(Self {
            state: AppState::new(catalog, &config),
            storage,
            config,
            listeners: Vec::new(),
        })
    }

    /// Apply one intent, persist if it committed, then notify subscribers.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), StoreError> {
        tracing::debug!(?intent, "dispatching intent");

        let effect = self.state.apply(intent, &self.config).inspect_err(|err| {
            tracing::debug!(error = %err, "intent rejected");
        })?;

        let persisted = match effect {
            Some(Effect::PersistCatalog) => self.persist(),
            None => Ok(()),
        };

        for listener in &mut self.listeners {
            listener(&self.state);
        }

        persisted.map_err(StoreError::from)
    }

    /// Call `listener` with the new state after every applied intent.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Get the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the committed questionnaires.
    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    /// Get the questionnaire being authored.
    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    /// Get the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the settings.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let key = self.config.storage_key.as_str();
        let json = self.state.catalog.to_json()?;

        match self.storage.set(key, &json) {
            Ok(()) => {
                tracing::info!(key, entries = self.state.catalog.len(), "persisted catalog");
                Ok(())
            }
            Err(err) => {
                let err = PersistenceError::backend(err);
                tracing::warn!(key, error = %err, "failed to persist catalog");
                Err(err)
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("storage", &self.storage)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
