//! Best-effort key-value persistence.
//!
//! Backends implement [`KeyValueStore`] and report every failure. [`Storage`]
//! sits in front of a backend, converts values to and from JSON, and on the
//! non-`_checked` paths logs failures and carries on: a dropped write never
//! reaches the caller, and a missing or corrupt value reads as `None`.

mod file;
mod memory;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed for `{key}`: {source}")]
    Io { key: String, #[source] source: std::io::Error },
    #[error("stored value for `{key}` is not valid JSON: {source}")]
    Corrupt { key: String, #[source] source: serde_json::Error },
    #[error("could not encode value for `{key}`: {source}")]
    Encode { key: String, #[source] source: serde_json::Error },
    #[error("storage quota exceeded writing `{key}` ({needed} bytes needed, {available} available)")]
    QuotaExceeded { key: String, needed: usize, available: usize },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Raw string storage under string keys, in the manner of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    /// Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), PersistenceError>;
}

/// JSON facade over a shared [`KeyValueStore`]. Cloning shares the backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_struct("Storage").finish_non_exhaustive() }
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self { Self { backend: Arc::new(backend) } }
    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self { Self { backend } }
    pub fn in_memory() -> Self { Self::new(MemoryStore::new()) }

    pub fn get_checked<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.backend.read(key)? else { return Ok(None) };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Corrupt { key: key.to_string(), source })
    }

    pub fn set_checked<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Encode { key: key.to_string(), source })?;
        self.backend.write(key, &raw)
    }

    pub fn remove_checked(&self, key: &str) -> Result<(), PersistenceError> { self.backend.delete(key) }

    /// Reads and decodes `key`. Failures are logged and read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_checked(key).unwrap_or_else(|error| {
            tracing::warn!(%key, %error, "error reading from storage");
            None
        })
    }

    /// Encodes and stores `value`. A failed write is logged and dropped.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(error) = self.set_checked(key, value) {
            tracing::warn!(%key, %error, "error writing to storage, write dropped");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(error) = self.remove_checked(key) {
            tracing::warn!(%key, %error, "error removing from storage");
        }
    }

    /// Whether a raw value is present, regardless of whether it decodes.
    pub fn contains(&self, key: &str) -> bool { matches!(self.backend.read(key), Ok(Some(_))) }
}
