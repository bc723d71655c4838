//! The dashboard: available queues, the user's tickets, join and refresh.

use std::time::Duration;

use api::{JoinedTicket, QueueInfo, TicketView, User};
use dioxus::prelude::*;

use crate::app_state::{use_app_state, use_dashboard_config, AppState};
use crate::client::use_client;
use crate::format::{eta_label, open_tag, service_minutes, QueueLoad};
use crate::icons::{FaBell, FaBolt, FaClock, FaRightFromBracket, FaRotateRight, FaUser, FaUsers};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::timer::sleep;
use crate::views::TicketReceipt;
use crate::Icon;

#[component]
pub fn DashboardView(user: User) -> Element {
    let client = use_client();
    let config = use_dashboard_config();
    let mut state = use_app_state();
    let mut notices = use_notifications();
    let mut queues = use_signal(Vec::<QueueInfo>::new);
    let mut tickets = use_signal(Vec::<TicketView>::new);
    let mut loading = use_signal(|| false);
    let mut joining = use_signal(|| Option::<String>::None);
    let mut receipt = use_signal(|| Option::<JoinedTicket>::None);

    let email = client
        .users
        .current_email()
        .unwrap_or_else(|| user.email.clone());

    let refresh = use_callback({
        let client = client.clone();
        let user_id = user.user_id.clone();
        move |_: ()| {
            let client = client.clone();
            let user_id = user_id.clone();
            spawn(async move {
                loading.set(true);
                let refreshed = client.refresh_all(&user_id).await;
                match refreshed.queues {
                    Ok(list) => queues.set(list),
                    Err(e) => notify(
                        &mut notices,
                        NoticeLevel::Error,
                        e.user_message("Failed to load queues"),
                    ),
                }
                match refreshed.tickets {
                    Ok(list) => tickets.set(list),
                    Err(e) => notify(
                        &mut notices,
                        NoticeLevel::Error,
                        e.user_message("Failed to load tickets"),
                    ),
                }
                loading.set(false);
            });
        }
    });

    let join = use_callback({
        let client = client.clone();
        let user_id = user.user_id.clone();
        let email = email.clone();
        move |queue_id: String| {
            let client = client.clone();
            let user_id = user_id.clone();
            let email = email.clone();
            spawn(async move {
                joining.set(Some(queue_id.clone()));
                match client.join_and_track(&queue_id, &user_id, &email).await {
                    Ok(joined) => {
                        notify(
                            &mut notices,
                            NoticeLevel::Success,
                            format!("Joined successfully! Your position: {}", joined.ticket.position),
                        );
                        if joined.eta.is_none() {
                            notify(
                                &mut notices,
                                NoticeLevel::Warning,
                                "Wait time is not available yet",
                            );
                        }
                        tickets.write().push(joined.view());
                        receipt.set(Some(joined));
                    }
                    Err(e) => notify(
                        &mut notices,
                        NoticeLevel::Error,
                        e.user_message("Failed to join queue"),
                    ),
                }
                joining.set(None);
            });
        }
    });

    let logout = {
        let client = client.clone();
        move |_: MouseEvent| {
            client.users.logout();
            notify(&mut notices, NoticeLevel::Info, "Logged out");
            state.set(AppState::default());
        }
    };

    // Initial load
    use_hook(move || {
        refresh.call(());
    });

    // Local countdown, no network
    use_effect({
        let client = client.clone();
        let interval = config.tick_interval_secs;
        move || {
            if interval == 0 {
                return;
            }
            let client = client.clone();
            spawn(async move {
                loop {
                    sleep(Duration::from_secs(u64::from(interval))).await;
                    let shown = tickets.peek().clone();
                    let ticked = client.tick(&shown);
                    if ticked != shown {
                        tickets.set(ticked);
                    }
                }
            });
        }
    });

    let queue_list = queues();
    let queue_count = queue_list.len();
    let ticket_list = tickets();
    let ticket_count = ticket_list.len();

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h2 { "SmartQueue" }
                div {
                    class: "header-actions",
                    span {
                        class: "header-user",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        " {email}"
                    }
                    button {
                        class: "header-button",
                        disabled: loading(),
                        onclick: move |_| {
                            refresh.call(());
                        },
                        Icon { icon: FaRotateRight, width: 14, height: 14 }
                        if loading() { " Refreshing..." } else { " Refresh" }
                    }
                    button {
                        class: "header-button",
                        onclick: logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        " Logout"
                    }
                }
            }

            main {
                class: "dashboard-body",
                section {
                    class: "card queues",
                    h3 {
                        Icon { icon: FaUsers, width: 16, height: 16 }
                        " Available Queues "
                        span { class: "badge", "{queue_count}" }
                    }
                    if queue_list.is_empty() {
                        p { class: "secondary", "No queues available." }
                    }
                    for queue in queue_list {
                        QueueRow {
                            key: "{queue.queue_id}",
                            busy: joining().as_deref() == Some(queue.queue_id.as_str()),
                            queue: queue.clone(),
                            on_join: move |id: String| {
                                join.call(id);
                            },
                        }
                    }
                }

                section {
                    class: "card tickets",
                    h3 {
                        Icon { icon: FaBell, width: 16, height: 16 }
                        " My Tickets "
                        span { class: "badge", "{ticket_count}" }
                    }
                    if ticket_list.is_empty() {
                        div {
                            class: "empty",
                            Icon { icon: FaBell, width: 40, height: 40 }
                            div { "No active tickets" }
                        }
                    }
                    for view in ticket_list {
                        div {
                            key: "{view.ticket.ticket_id}",
                            class: "ticket-row",
                            strong { "Position {view.ticket.position}" }
                            span { class: "tag blue", "{view.ticket.status}" }
                            span {
                                class: "secondary",
                                "ETA: "
                                {eta_label(view.remaining_minutes)}
                            }
                        }
                    }
                }
            }

            if let Some(joined) = receipt() {
                TicketReceipt {
                    joined,
                    email: email.clone(),
                    on_close: move |_| receipt.set(None),
                }
            }
        }
    }
}

#[component]
fn QueueRow(queue: QueueInfo, busy: bool, on_join: EventHandler<String>) -> Element {
    let load = QueueLoad::of(queue.current_waiting_count);
    let (open_class, open_label) = open_tag(&queue);
    let description = queue
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description".to_string());
    let average = service_minutes(queue.average_service_time_minutes);
    let queue_id = queue.queue_id.clone();

    rsx! {
        div {
            class: "queue-row",
            div {
                class: "queue-meta",
                div {
                    strong { "{queue.name}" }
                    span { class: load.tag_class(), "{queue.current_waiting_count} waiting" }
                }
                p { "{description}" }
                div {
                    span {
                        class: "tag blue",
                        Icon { icon: FaClock, width: 12, height: 12 }
                        " ~{average} min avg"
                    }
                    span { class: open_class, "{open_label}" }
                }
            }
            button {
                class: "primary-button",
                disabled: busy,
                onclick: move |_| on_join.call(queue_id.clone()),
                Icon { icon: FaBolt, width: 14, height: 14 }
                if busy { " Joining..." } else { " Join" }
            }
        }
    }
}
