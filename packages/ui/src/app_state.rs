//! Application state context: which view is showing and who is logged in.

use dioxus::prelude::*;
use store::config::DashboardConfig;
use store::{SmartQueueConfig, User};

use crate::client::make_client;
use crate::notifications::Notifications;

/// The three top-level views. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Login,
    Register,
    Dashboard,
}

/// Application state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub view: AppView,
}

impl AppState {
    /// Start-up state: a stored session opens the dashboard.
    pub fn restore(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::logged_in(user),
            None => Self::default(),
        }
    }

    pub fn logged_in(user: User) -> Self {
        Self {
            user: Some(user),
            view: AppView::Dashboard,
        }
    }

    pub fn show(&mut self, view: AppView) {
        // The dashboard needs a user
        if view == AppView::Dashboard && self.user.is_none() {
            self.view = AppView::Login;
        } else {
            self.view = view;
        }
    }
}

/// Get the current application state.
/// Returns a signal that updates on login, logout and view switches.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the dashboard settings the app was started with.
pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Provider component that builds the client and the state around it.
/// Wrap your app with this component.
#[component]
pub fn AppProvider(config: SmartQueueConfig, children: Element) -> Element {
    let dashboard = config.dashboard.clone();
    let client = use_context_provider(|| make_client(&config));
    use_context_provider(|| dashboard);
    use_context_provider(|| Signal::new(Notifications::default()));

    let state = use_signal(|| AppState::restore(client.users.current_user()));
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_with_session_opens_dashboard() {
        let user = User::new("u1", "ann@example.com", "Ann");
        let state = AppState::restore(Some(user.clone()));
        assert_eq!(state.view, AppView::Dashboard);
        assert_eq!(state.user, Some(user));
    }

    #[test]
    fn test_restore_without_session_shows_login() {
        assert_eq!(AppState::restore(None).view, AppView::Login);
    }

    #[test]
    fn test_dashboard_requires_user() {
        let mut state = AppState::default();
        state.show(AppView::Dashboard);
        assert_eq!(state.view, AppView::Login);
        state.show(AppView::Register);
        assert_eq!(state.view, AppView::Register);
    }
}
