use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::SmartQueueConfig;
use ui::views::{DashboardView, LoginView, RegisterView};
use ui::{use_app_state, AppProvider, AppView, NotificationStack};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded `smartqueue.toml`.
const CONFIG_TOML: &str = include_str!("../smartqueue.toml");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // The launcher installs a default logger if this one is refused
    let _ = dioxus::logger::init(level);

    dioxus::launch(App);
}

/// Parse the embedded config, falling back to the defaults.
fn load_config(text: &str) -> SmartQueueConfig {
    match SmartQueueConfig::from_toml(text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", SmartQueueConfig::filename(), e);
            SmartQueueConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AppProvider {
            config,
            NotificationStack {}
            CurrentView {}
        }
    }
}

/// Show whichever of login, register or dashboard the app state selects.
#[component]
fn CurrentView() -> Element {
    let state = use_app_state();
    let current = state();

    match (current.view, current.user) {
        (AppView::Register, _) => rsx! { RegisterView {} },
        (AppView::Dashboard, Some(user)) => rsx! { DashboardView { user } },
        _ => rsx! { LoginView {} },
    }
}
