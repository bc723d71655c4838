//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, resolve_base_url, use_client, Client, PlatformStore};

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod app_state;
pub use app_state::{use_app_state, use_dashboard_config, AppProvider, AppState, AppView};

pub mod notifications;
pub use notifications::{notify, use_notifications, NoticeLevel, NotificationStack, Notifications};

pub mod format;
pub mod validate;

mod timer;
