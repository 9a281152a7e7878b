/// Key-value persistence for BrickMind (browser localStorage or in-memory)
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors from the underlying storage medium
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No `window.localStorage` (non-browser host, or disabled by the user).
    #[error("local storage is not available")]
    Unavailable,
    /// The medium refused the write (quota exceeded, private mode, ...).
    #[error("failed to write storage slot {key}: {reason}")]
    WriteFailed { key: String, reason: String },
    /// The medium refused the read.
    #[error("failed to read storage slot {key}: {reason}")]
    ReadFailed { key: String, reason: String },
}

/// A flat string key-value medium, shaped like `window.localStorage`
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage; clones share the same slots
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let inner = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(BrowserStorage { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Storage picked at runtime: localStorage when present, memory otherwise
#[derive(Debug, Clone)]
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    pub fn detect() -> Self {
        match BrowserStorage::local() {
            Ok(storage) => AppStorage::Browser(storage),
            Err(e) => {
                log::warn!("{}; wishlist will not survive a reload", e);
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStore for AppStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            AppStorage::Browser(s) => s.get_item(key),
            AppStorage::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            AppStorage::Browser(s) => s.set_item(key, value),
            AppStorage::Memory(s) => s.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match self {
            AppStorage::Browser(s) => s.remove_item(key),
            AppStorage::Memory(s) => s.remove_item(key),
        }
    }
}
