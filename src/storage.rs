//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage` / `window.sessionStorage`.

use findit_core::session::{KeyValueStore, SessionStore, StorageError};

/// One browser storage area. `None` when the browser refuses access.
pub struct WebStorage(Option<web_sys::Storage>);

impl WebStorage {
    pub fn local() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }

    pub fn session() -> Self {
        Self(web_sys::window().and_then(|w| w.session_storage().ok().flatten()))
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Unavailable)
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.0 {
            let _ = storage.remove_item(key);
        }
    }
}

pub type BrowserSession = SessionStore<WebStorage, WebStorage>;

/// Fresh handle on both scopes; cheap, holds no state of its own
pub fn session_store() -> BrowserSession {
    SessionStore::new(WebStorage::local(), WebStorage::session())
}
