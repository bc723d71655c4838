//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key as a
//! file. It stands in for `localStorage` on native builds so the session and ETA
//! cache survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── kv/
//!     └── <hex(key)>         # value bytes, UTF-8
//! ```
//!
//! Keys are hex-encoded so ticket identifiers containing path separators cannot
//! escape the directory.
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` (in the `ui` crate) to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/smartqueue/` |
//! | Linux | `~/.local/share/smartqueue/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\smartqueue\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn kv_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let encoded: String = key.bytes().map(|b| format!("{b:02x}")).collect();
        self.kv_dir().join(encoded)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }

    fn clear(&self) {
        let _ = std::fs::remove_dir_all(self.kv_dir());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("smartqueue_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("currentUser", r#"{"userId":"u1"}"#);
        store.set("eta_a/b", "7");

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("currentUser").as_deref(), Some(r#"{"userId":"u1"}"#));
        assert_eq!(reopened.get("eta_a/b").as_deref(), Some("7"));

        reopened.remove("currentUser");
        assert!(store.get("currentUser").is_none());

        reopened.clear();
        assert!(store.get("eta_a/b").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
