//! # Dashboard orchestration
//!
//! The multi-step flows the dashboard runs, kept here so their network
//! behaviour is testable without a UI:
//!
//! | Flow | Calls |
//! |------|-------|
//! | [`SmartQueue::refresh_all`] | `GET /queues`, `GET /v1/users/{id}/tickets`, ETA from the cache only. |
//! | [`SmartQueue::join_and_track`] | `POST /queues/{id}/join`, then exactly one forced `GET /eta/track`. |
//!
//! A join that succeeds keeps its ticket even when the ETA request fails; the
//! ticket then carries no estimate.
//! | [`SmartQueue::tick`] | None; recomputes shown ETAs from the cache without rewriting it. |

use store::{CachedEta, Clock, KeyValueStore, QueueInfo, Ticket};

use crate::error::ApiError;
use crate::gateway::SmartQueue;
use crate::transport::Transport;

/// A ticket as shown under "My tickets", with its ETA from the cache.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketView {
    pub ticket: Ticket,
    /// Remaining minutes, else the original estimate.
    pub estimated_wait_minutes: Option<u32>,
    pub remaining_minutes: Option<u32>,
}

impl TicketView {
    pub fn new(ticket: Ticket, eta: Option<&CachedEta>) -> Self {
        Self {
            ticket,
            estimated_wait_minutes: eta.and_then(CachedEta::display_minutes),
            remaining_minutes: eta.and_then(|e| e.remaining_minutes),
        }
    }
}

/// Outcome of "Refresh all". Each half fails on its own.
#[derive(Clone, Debug)]
pub struct DashboardRefresh {
    pub queues: Result<Vec<QueueInfo>, ApiError>,
    pub tickets: Result<Vec<TicketView>, ApiError>,
}

/// A freshly joined ticket and its first ETA, if the ETA service answered.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedTicket {
    pub ticket: Ticket,
    pub eta: Option<CachedEta>,
}

impl JoinedTicket {
    pub fn view(&self) -> TicketView {
        TicketView::new(self.ticket.clone(), self.eta.as_ref())
    }
}

impl<T, S, C> SmartQueue<T, S, C>
where
    T: Transport + Clone,
    S: KeyValueStore + Clone + Send + Sync + 'static,
    C: Clock + Clone,
{
    /// Reload queues, then the user's tickets with cached ETAs. No ETA requests.
    pub async fn refresh_all(&self, user_id: &str) -> DashboardRefresh {
        let queues = self.queues.list_queues().await;
        if let Err(e) = &queues {
            tracing::warn!("Failed to load queues: {}", e);
        }
        let tickets = self.load_my_tickets(user_id).await;
        DashboardRefresh { queues, tickets }
    }

    /// The user's tickets, each with its decayed ETA from the cache.
    pub async fn load_my_tickets(&self, user_id: &str) -> Result<Vec<TicketView>, ApiError> {
        let tickets = self.users.my_tickets(user_id).await?;
        Ok(tickets
            .into_iter()
            .map(|ticket| {
                let eta = self.queues.cached_eta(&ticket.ticket_id);
                TicketView::new(ticket, eta.as_ref())
            })
            .collect())
    }

    /// Join a queue and start tracking the new ticket with one forced ETA fetch.
    pub async fn join_and_track(
        &self,
        queue_id: &str,
        user_id: &str,
        email: &str,
    ) -> Result<JoinedTicket, ApiError> {
        let ticket = self.queues.join_queue(queue_id, user_id).await?;
        let eta = match self
            .queues
            .track_eta(queue_id, &ticket.ticket_id, ticket.position, email, true)
            .await
        {
            Ok(eta) => Some(eta),
            Err(e) => {
                tracing::warn!("No ETA for ticket {}: {}", ticket.ticket_id, e);
                None
            }
        };
        Ok(JoinedTicket { ticket, eta })
    }

    /// Recompute shown ETAs from the cache. Tickets with no entry keep their values.
    pub fn tick(&self, tickets: &[TicketView]) -> Vec<TicketView> {
        tickets
            .iter()
            .map(|view| match self.queues.peek_eta(&view.ticket.ticket_id) {
                Some(eta) => TicketView::new(view.ticket.clone(), Some(&eta)),
                None => view.clone(),
            })
            .collect()
    }
}

/// Cosmetic progress for a position, in percent.
pub fn estimated_progress(position: u32) -> u32 {
    let p = f64::from(position);
    ((1.0 - p / (p + 20.0)) * 100.0).round() as u32
}
