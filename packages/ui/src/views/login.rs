//! Login page view with email/password form.

use dioxus::prelude::*;

use crate::app_state::{use_app_state, AppState, AppView};
use crate::client::use_client;
use crate::icons::{FaEnvelope, FaLock};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::validate::check_login;
use crate::Icon;

/// Login page component.
#[component]
pub fn LoginView() -> Element {
    let client = use_client();
    let mut state = use_app_state();
    let mut notices = use_notifications();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(msg) = check_login(&e, &p) {
                error.set(Some(msg));
                return;
            }

            loading.set(true);
            match client.users.login(&e, &p).await {
                Ok(user) => {
                    notify(&mut notices, NoticeLevel::Success, "Logged in");
                    state.set(AppState::logged_in(user));
                }
                Err(err) => {
                    loading.set(false);
                    let msg = err.user_message("Wrong email or password");
                    notify(&mut notices, NoticeLevel::Error, msg.clone());
                    error.set(Some(msg));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h1 { "SmartQueue" }
                    p { "Sign in to continue" }
                }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label {
                        class: "input-with-icon",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    label {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 14, height: 14 }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    button {
                        class: "link-button",
                        onclick: move |_| state.write().show(AppView::Register),
                        "Register now"
                    }
                }
            }
        }
    }
}
