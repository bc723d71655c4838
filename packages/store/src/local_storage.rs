//! # `localStorage` key-value store (browser-side persistence)
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It writes straight through to `window.localStorage` via
//! [`web_sys::Storage`], so state is scoped to the page origin and shared by all
//! tabs on it (last write wins).
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Storage can be unavailable (private browsing, quota
//! exceeded); the client then behaves as if nothing was stored. The backend holds
//! the authoritative copy of every record.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web platform.
///
/// Zero-size: the `Storage` handle is looked up on every call because
/// `web_sys::Storage` is neither `Send` nor `Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write for {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}
