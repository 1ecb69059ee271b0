//! Durable key-value storage used by the session store.
//!
//! The store persists exactly one key (the visited-tab set). Backends only
//! need string get/set/remove; encoding is the caller's concern.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

mod file;

pub use file::{is_valid_key, FileStorage};

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key-value store.
///
/// Removing a key that does not exist succeeds.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` if the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes `key`.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// In-memory storage.
///
/// Clones share the same map, so a caller can keep a handle and observe what
/// the store wrote after handing it a boxed clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one key.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.lock().insert(key.to_string(), value.to_string());
        storage
    }

    /// Returns true if `key` currently has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}
