//! File-backed key-value storage
//!
//! One JSON file holds a string-keyed object of values. Every `set` rewrites
//! the whole file synchronously: the full collection is the unit of
//! durability, there are no partial writes and no transactions. The store is
//! process-local and single-writer; the last write wins.

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// JSON-file-backed key-value store
pub struct KvStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl KvStore {
    /// Open the store at `path`, creating parent directories as needed.
    /// A missing file starts the store empty; it is created on first write.
    pub fn open(path: PathBuf) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                AppError::Storage(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                AppError::Storage(format!("corrupt store file {}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Read and deserialize the value stored under `key`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries
            .get(key)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(|e| AppError::Storage(format!("corrupt value under key '{}': {}", key, e)))
    }

    /// Store `value` under `key` and synchronously rewrite the backing file
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let value = serde_json::to_value(value)
            .map_err(|e| AppError::Storage(format!("failed to serialize '{}': {}", key, e)))?;
        entries.insert(key.to_string(), value);

        let raw = serde_json::to_string_pretty(&*entries)
            .map_err(|e| AppError::Storage(format!("failed to serialize store: {}", e)))?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::Storage(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("data.json")).unwrap();
        assert_eq!(store.get::<Vec<String>>("anything").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("data.json")).unwrap();

        store.set("names", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let names: Option<Vec<String>> = store.get("names").unwrap();
        assert_eq!(names, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let store = KvStore::open(path.clone()).unwrap();
        store.set("count", &7).unwrap();
        drop(store);

        let reopened = KvStore::open(path).unwrap();
        assert_eq!(reopened.get::<i32>("count").unwrap(), Some(7));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");

        let store = KvStore::open(path).unwrap();
        store.set("ok", &true).unwrap();
        assert_eq!(store.get::<bool>("ok").unwrap(), Some(true));
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();

        assert!(KvStore::open(path).is_err());
    }
}
