/// Trait for durable key-value storage that holds the catalog.
///
/// Implementations decide where the data lives (memory, files, browser
/// storage, etc.). Values are opaque strings; the catalog is written under a
/// single fixed key and overwritten wholesale on every commit.
pub trait KeyValueStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if the key is present
    /// * `Ok(None)` if nothing has been stored yet
    /// * `Err` on backend failure
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}
