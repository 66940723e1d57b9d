//! localStorage-backed preference store.

use web_sys::{Storage, Window};

use crate::prefs::{MemoryStore, PreferenceStore, StoreError};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable("localStorage missing".into())),
            Err(e) => Err(StoreError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
    }
}

/// localStorage when the browser allows it, otherwise a session-only store.
pub fn open_store(window: &Window) -> Box<dyn PreferenceStore> {
    match LocalStorage::open(window) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Preferences kept for this session only: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
