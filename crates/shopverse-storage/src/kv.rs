//! Typed key-value wrapper with automatic serialization.

use crate::{Storage, StorageError};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a [`Storage`] backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    storage: S,
}

impl<S: Storage> Cache<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<PersistedState<CartStore>> = cache.get("shopverse-cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.storage.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.storage.get_item(key)?.is_some())
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.storage.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Draft {
        note: String,
        count: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStorage::new());
        let draft = Draft {
            note: "gift wrap".to_string(),
            count: 2,
        };

        cache.set("draft", &draft).unwrap();
        assert_eq!(cache.get::<Draft>("draft").unwrap(), Some(draft));
        assert!(cache.exists("draft").unwrap());
    }

    #[test]
    fn test_get_missing() {
        let cache = Cache::new(MemoryStorage::new());
        assert_eq!(cache.get::<Draft>("missing").unwrap(), None);
        assert!(!cache.exists("missing").unwrap());
    }

    #[test]
    fn test_get_malformed_is_error() {
        let storage = MemoryStorage::new();
        storage.set_item("draft", "not json").unwrap();
        let cache = Cache::new(storage);

        assert!(matches!(
            cache.get::<Draft>("draft"),
            Err(StorageError::SerializeError(_))
        ));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStorage::new());
        cache.set("draft", &1u32).unwrap();
        cache.delete("draft").unwrap();
        assert!(cache.keys().unwrap().is_empty());
    }
}
