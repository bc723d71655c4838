//! Registration page view.

use api::RegisterRequest;
use dioxus::prelude::*;

use crate::app_state::{use_app_state, AppState, AppView};
use crate::client::use_client;
use crate::icons::{FaEnvelope, FaLock, FaPhone, FaUser};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::validate::check_registration;
use crate::Icon;

/// Register page component.
#[component]
pub fn RegisterView() -> Element {
    let client = use_client();
    let mut state = use_app_state();
    let mut notices = use_notifications();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut email_notifications = use_signal(|| true);
    let mut sms_notifications = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let request = RegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                phone: phone().trim().to_string(),
                password: password(),
                email_notification_enabled: email_notifications(),
                sms_notification_enabled: sms_notifications(),
            };
            if let Err(msg) = check_registration(&request, &confirm_password()) {
                error.set(Some(msg));
                return;
            }

            loading.set(true);
            match client.users.register(&request).await {
                Ok(user) => {
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        format!("Welcome {}!", user.display_name()),
                    );
                    state.set(AppState::logged_in(user));
                }
                Err(err) => {
                    loading.set(false);
                    let msg = err.user_message("Registration failed. Please try again.");
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
                class: "auth-card wide",
                div {
                    class: "auth-heading",
                    h1 { "SmartQueue" }
                    p { "Create your account" }
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label {
                        class: "input-with-icon",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        input {
                            r#type: "text",
                            placeholder: "Full name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
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
                        Icon { icon: FaPhone, width: 14, height: 14 }
                        input {
                            r#type: "tel",
                            placeholder: "+84333138386",
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
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

                    label {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 14, height: 14 }
                        input {
                            r#type: "password",
                            placeholder: "Confirm password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    fieldset {
                        class: "preferences",
                        legend { "Notification preferences" }
                        label {
                            input {
                                r#type: "checkbox",
                                checked: email_notifications(),
                                onchange: move |evt: FormEvent| email_notifications.set(evt.checked()),
                            }
                            " Email notifications"
                        }
                        label {
                            input {
                                r#type: "checkbox",
                                checked: sms_notifications(),
                                onchange: move |evt: FormEvent| sms_notifications.set(evt.checked()),
                            }
                            " SMS notifications"
                        }
                    }

                    button {
                        class: "primary-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        onclick: move |_| state.write().show(AppView::Login),
                        "Sign in here"
                    }
                }
            }
        }
    }
}
