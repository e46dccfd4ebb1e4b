use std::collections::HashMap;
use std::sync::Mutex;

use super::{KeyValueStore, PersistenceError};

/// In-process store. With a quota, writes that would push the summed length
/// of all keys and values past it fail with `QuotaExceeded`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
    pub fn with_quota(bytes: usize) -> Self { Self { quota: Some(bytes), ..Self::default() } }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, PersistenceError> {
        self.entries.lock().map_err(|_| PersistenceError::Unavailable("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut entries = self.lock()?;
        if let Some(quota) = self.quota {
            let used: usize = entries.iter().filter(|(k, _)| k.as_str() != key).map(|(k, v)| k.len() + v.len()).sum();
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);
            if needed > available {
                return Err(PersistenceError::QuotaExceeded { key: key.to_string(), needed, available });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
