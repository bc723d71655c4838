//! # Key-value storage abstraction
//!
//! [`KeyValueStore`] is the persistence seam for everything the client keeps
//! between page loads: the session record and the per-ticket ETA cache. It mirrors
//! the browser's `localStorage` contract: string keys, string values, every call a
//! single atomic operation, no cross-key transactions.
//!
//! Implementations swallow backend errors. A failed read is `None` and a failed
//! write is a no-op, so an unavailable or corrupted store degrades to "no local
//! data" instead of failing the caller.
//!
//! | Implementation | Used on |
//! |----------------|---------|
//! | [`crate::LocalStorageStore`] | Web (WASM + `web` feature) |
//! | [`crate::FileStore`] | Native builds |
//! | [`crate::MemoryStore`] | Tests |

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Remove every key owned by this store.
    fn clear(&self);
}
