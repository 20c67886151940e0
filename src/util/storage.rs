//! Durable key-value persistence with contained failures.
//!
//! Hosts map `KeyValueStore` onto whatever durable storage they have (browser
//! localStorage, a settings file). `save_json`/`load_json` never propagate
//! storage or parse errors: failures are logged and reported as `false`/`None`
//! so nothing in this layer can take the page down.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure: {0}")]
pub struct StorageError(pub String);

/// String key-value store with fallible access, e.g. quota-limited browser
/// storage behind a WASM host.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Serializes `value` as JSON under `key`. Returns success as a boolean.
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> bool {
    let serialized = match serde_json::to_string(value) {
        Ok(serialized) => serialized,
        Err(error) => {
            warn!(key, error = %error, "failed to serialize value for storage");
            return false;
        }
    };
    match store.set(key, &serialized) {
        Ok(()) => true,
        Err(error) => {
            warn!(key, error = %error, "failed to write to storage");
            false
        }
    }
}

/// Reads and deserializes the value under `key`; `None` when absent or on any
/// contained failure.
#[must_use]
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let stored = match store.get(key) {
        Ok(stored) => stored?,
        Err(error) => {
            warn!(key, error = %error, "failed to read from storage");
            return None;
        }
    };
    match serde_json::from_str(&stored) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, error = %error, "failed to parse stored value");
            None
        }
    }
}

/// In-memory store for tests and headless usage, with injectable failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, bypassing JSON decoding. Test hook.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores raw text without serialization. Test hook for corrupt payloads.
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError("simulated read failure".to_owned()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError("simulated quota exceeded".to_owned()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
