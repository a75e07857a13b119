//! Key-value persistence providers
//!
//! The expense store keeps its whole collection under one key. Providers only
//! need to offer atomic get/set of a string value per key.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::ExpenseError;

use super::file_io::{read_text, write_atomic};

/// A durable string store addressed by key
///
/// `set` must replace the value atomically: readers observe either the old
/// value or the new one, never a mix.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError>;

    /// Remove the value stored under `key`; absent keys are not an error
    fn remove(&self, key: &str) -> Result<(), ExpenseError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ExpenseError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ExpenseError> {
        (**self).remove(key)
    }
}

/// In-process provider; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.remove(key);
        Ok(())
    }
}

/// File-backed provider: one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir` (created on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ExpenseError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ExpenseError::Storage(format!(
                "Invalid storage key '{}': use letters, digits, '-' or '_'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ExpenseError> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<(), ExpenseError> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                ExpenseError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert!(store.get("expenses").unwrap().is_none());

        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));

        store.set("expenses", "[1]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[1]"));

        store.remove("expenses").unwrap();
        assert!(store.get("expenses").unwrap().is_none());
        store.remove("expenses").unwrap();
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));
        assert_eq!(store.dir(), &temp_dir.path().join("data"));

        assert!(store.get("expenses").unwrap().is_none());
        store.set("expenses", "[]").unwrap();
        assert!(temp_dir.path().join("data").join("expenses.json").exists());

        let reopened = FileStore::new(temp_dir.path().join("data"));
        assert_eq!(reopened.get("expenses").unwrap().as_deref(), Some("[]"));

        reopened.remove("expenses").unwrap();
        assert!(store.get("expenses").unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
        assert!(store.path_for("expenses_v1").is_ok());
    }

    #[test]
    fn test_shared_provider_through_arc() {
        let shared = Arc::new(MemoryStore::new());
        let other = Arc::clone(&shared);

        shared.set("language", "tamil").unwrap();
        assert_eq!(other.get("language").unwrap().as_deref(), Some("tamil"));
    }
}
