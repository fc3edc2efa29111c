//! Key-value store with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe key-value store.
///
/// Values are JSON-encoded. Cloning a `Store` yields a handle onto the
/// same underlying storage.
#[derive(Clone)]
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    backend: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    backend: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl Store {
    /// Open the page's local storage.
    ///
    /// Fails when there is no window or `localStorage` is disabled.
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let backend = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { backend })
    }

    /// Open an in-memory store (non-browser builds). Data is shared only
    /// between this handle and its clones.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            backend: std::rc::Rc::new(std::cell::RefCell::new(std::collections::HashMap::new())),
        })
    }

    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist; a value that fails to
    /// deserialize is an error the caller may treat as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value under a key, overwriting any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.set_raw(key, &text)
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_raw(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_raw(key)?.is_some())
    }

    #[cfg(target_arch = "wasm32")]
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    #[cfg(target_arch = "wasm32")]
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    #[cfg(target_arch = "wasm32")]
    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.backend
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.backend.borrow().get(key).cloned())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.backend.borrow_mut().remove(key);
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    fn entry() -> Entry {
        Entry {
            name: "widget".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_get_missing_key() {
        let store = Store::open().unwrap();
        assert_eq!(store.get::<Entry>("missing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = Store::open().unwrap();
        store.set("entry", &entry()).unwrap();
        assert_eq!(store.get::<Entry>("entry").unwrap(), Some(entry()));
    }

    #[test]
    fn test_set_overwrites() {
        let store = Store::open().unwrap();
        store.set("entry", &entry()).unwrap();
        let updated = Entry {
            name: "widget".to_string(),
            count: 9,
        };
        store.set("entry", &updated).unwrap();
        assert_eq!(store.get::<Entry>("entry").unwrap(), Some(updated));
    }

    #[test]
    fn test_remove_and_exists() {
        let store = Store::open().unwrap();
        store.set("entry", &entry()).unwrap();
        assert!(store.exists("entry").unwrap());

        store.remove("entry").unwrap();
        assert!(!store.exists("entry").unwrap());
    }

    #[test]
    fn test_get_wrong_shape_is_error() {
        let store = Store::open().unwrap();
        store.set("entry", &42_i32).unwrap();
        assert!(store.get::<Entry>("entry").is_err());
    }

    #[test]
    fn test_clone_shares_backend() {
        let store = Store::open().unwrap();
        let handle = store.clone();

        store.set("entry", &entry()).unwrap();
        assert_eq!(handle.get::<Entry>("entry").unwrap(), Some(entry()));
    }
}
