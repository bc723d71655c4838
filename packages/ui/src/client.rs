//! Shared client constructor for all platforms.
//!
//! Returns a [`api::SmartQueue`] over the platform's key-value store:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: filesystem via [`store::FileStore`] under `<data_dir>/smartqueue/`

use api::{ReqwestTransport, SmartQueue};
use dioxus::prelude::*;
use store::{SmartQueueConfig, SystemClock};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// The client every view talks through.
pub type Client = SmartQueue<ReqwestTransport, PlatformStore, SystemClock>;

/// Build the client. Relative base URLs are resolved against the page origin,
/// and a 401 from the API sends the browser back to `/` once storage is wiped.
pub fn make_client(config: &SmartQueueConfig) -> Client {
    let mut config = config.clone();
    if let Some(origin) = page_origin() {
        config.api.base_url = resolve_base_url(&origin, &config.api.base_url);
        config.eta.base_url = resolve_base_url(&origin, &config.eta.base_url);
    }
    tracing::debug!(
        "API root {}, ETA root {}",
        config.api.base_url,
        config.eta.base_url
    );
    SmartQueue::new(&config, ReqwestTransport::new(), platform_store(), SystemClock)
        .on_unauthorized(back_to_login)
}

/// Get the client provided by [`crate::AppProvider`].
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Prefix a root-relative base with `origin`. Absolute bases pass through.
pub fn resolve_base_url(origin: &str, base: &str) -> String {
    if base.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), base)
    } else {
        base.to_string()
    }
}

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("smartqueue");
        store::FileStore::new(base)
    }
}

fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn back_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Session expired, login required");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(
            resolve_base_url("https://queue.example.com", "/api"),
            "https://queue.example.com/api"
        );
        assert_eq!(
            resolve_base_url("https://queue.example.com/", "/"),
            "https://queue.example.com/"
        );
        assert_eq!(
            resolve_base_url("https://queue.example.com", "http://eta:9000"),
            "http://eta:9000"
        );
    }
}
