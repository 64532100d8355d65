//! # Browser `localStorage` backend
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every call,
//! so it is `Copy` and can be created anywhere.
//!
//! Errors (storage disabled, quota exceeded, no `window`) are swallowed: reads
//! return `None` and writes are dropped with a warning. A browser without
//! storage behaves like a fresh visitor rather than crashing the UI.

use crate::session::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let written = Self::storage().and_then(|s| s.set_item(key, value).ok());
        if written.is_none() {
            tracing::warn!("localStorage write failed for {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
