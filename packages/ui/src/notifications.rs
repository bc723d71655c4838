//! Transient notifications shown in the corner of the page.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Success => "notice success",
            NoticeLevel::Warning => "notice warning",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    /// Add a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a notice and drop it again after [`NOTICE_LIFETIME`].
pub fn notify(notices: &mut Signal<Notifications>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        NoticeLevel::Error => tracing::warn!("{}", message),
        _ => tracing::debug!("{}", message),
    }
    let id = notices.write().push(level, message);
    let mut notices = *notices;
    spawn(async move {
        sleep(NOTICE_LIFETIME).await;
        notices.write().dismiss(id);
    });
}

#[component]
pub fn NotificationStack() -> Element {
    let mut notices = use_notifications();
    let entries = notices().entries.clone();

    rsx! {
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: notice.level.class(),
                    onclick: move |_| notices.write().dismiss(notice.id),
                    "{notice.message}"
                }
            }
        }
    }
}
