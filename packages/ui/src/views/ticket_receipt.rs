//! The receipt shown right after joining a queue.

use api::{estimated_progress, JoinedTicket};
use dioxus::prelude::*;

use crate::format::eta_label;
use crate::icons::{FaClock, FaUsers};
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn TicketReceipt(joined: JoinedTicket, email: String, on_close: EventHandler<()>) -> Element {
    let position = joined.ticket.position;
    let eta = eta_label(joined.eta.as_ref().and_then(|e| e.display_minutes()));
    let progress = estimated_progress(position);

    rsx! {
        ModalOverlay {
            title: "Your Queue Ticket",
            on_close: move |_| on_close.call(()),
            div {
                class: "receipt",
                div {
                    class: "statistic",
                    span { class: "statistic-title", "Your Position" }
                    span {
                        class: "statistic-value large",
                        Icon { icon: FaUsers, width: 24, height: 24 }
                        " {position} "
                        small { "in line" }
                    }
                }
                div {
                    class: "statistic",
                    span { class: "statistic-title", "Smart ETA" }
                    span {
                        class: "statistic-value",
                        Icon { icon: FaClock, width: 22, height: 22 }
                        " {eta}"
                    }
                }
                p {
                    class: "secondary",
                    "Ticket ID: "
                    strong { class: "selectable", "{joined.ticket.ticket_id}" }
                    br {}
                    "Email: "
                    strong { "{email}" }
                }
                div {
                    class: "progress",
                    div {
                        class: "progress-track",
                        div { class: "progress-bar", style: "width: {progress}%" }
                    }
                    span { class: "progress-label", "{progress}%" }
                }
                span { class: "secondary small", "Estimated progress" }
            }
        }
    }
}
