//! Browser `localStorage` store

use crate::error::{Result, StorageError};
use tilawah_core::KeyValueStore;
use web_sys::Storage;

/// Store backed by `window.localStorage`
///
/// Values are stored as UTF-8 strings; non-UTF-8 payloads are rejected.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the window's local storage
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> tilawah_core::Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?;
        Ok(value.map(String::into_bytes))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> tilawah_core::Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| StorageError::Backend(format!("non-UTF-8 value for {key}: {e}")))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?;
        Ok(())
    }
}
