//! # Queue operations
//!
//! Listing and joining queues, ticket status, batch advance, and ETA tracking.
//!
//! ETA tracking is the only call that touches the [`EtaCache`]:
//! [`track_eta`](QueueService::track_eta) answers from the cache unless told to
//! force a refresh or the ticket has never been seen, and
//! [`cached_eta`](QueueService::cached_eta) never goes to the network at all.

use store::{CachedEta, Clock, EtaCache, KeyValueStore, QueueInfo, Ticket};

use crate::client::{segment, HttpClient};
use crate::error::ApiError;
use crate::schema::{
    CreateQueueRequest, EtaTrackResponse, JoinQueueRequest, ProcessNextRequest,
    ProcessNextResponse, TicketStatusResponse,
};
use crate::transport::Transport;

/// Queue service client plus the ETA client and cache.
#[derive(Clone, Debug)]
pub struct QueueService<T: Transport, S: KeyValueStore, C: Clock> {
    pub(crate) api: HttpClient<T>,
    pub(crate) eta: HttpClient<T>,
    cache: EtaCache<S, C>,
}

impl<T: Transport, S: KeyValueStore, C: Clock> QueueService<T, S, C> {
    pub fn new(api: HttpClient<T>, eta: HttpClient<T>, cache: EtaCache<S, C>) -> Self {
        Self { api, eta, cache }
    }

    pub fn cache(&self) -> &EtaCache<S, C> {
        &self.cache
    }

    pub async fn list_queues(&self) -> Result<Vec<QueueInfo>, ApiError> {
        self.api.get("/queues", &[]).await
    }

    pub async fn get_queue(&self, queue_id: &str) -> Result<QueueInfo, ApiError> {
        self.api.get(&format!("/queues/{}", segment(queue_id)), &[]).await
    }

    /// Join a queue. Returns the ticket the backend created, position included.
    pub async fn join_queue(&self, queue_id: &str, user_id: &str) -> Result<Ticket, ApiError> {
        let request = JoinQueueRequest {
            user_id: user_id.to_string(),
        };
        let ticket: Ticket = self
            .api
            .post(&format!("/queues/{}/join", segment(queue_id)), &request)
            .await?;
        tracing::info!(
            "Joined queue {} as ticket {} at position {}",
            queue_id,
            ticket.ticket_id,
            ticket.position
        );
        Ok(ticket)
    }

    pub async fn ticket_status(
        &self,
        queue_id: &str,
        ticket_id: &str,
    ) -> Result<TicketStatusResponse, ApiError> {
        self.api
            .get(
                &format!("/queues/{}/status", segment(queue_id)),
                &[("ticketId", ticket_id.to_string())],
            )
            .await
    }

    /// Wait-time estimate for a ticket.
    ///
    /// Without `force`, a cached entry is decayed, persisted and returned with no
    /// network call. With `force`, or on a cache miss, the ETA service is asked and
    /// its answer replaces the cache entry.
    pub async fn track_eta(
        &self,
        queue_id: &str,
        ticket_id: &str,
        position: u32,
        customer_email: &str,
        force: bool,
    ) -> Result<CachedEta, ApiError> {
        if !force {
            if let Some(cached) = self.cache.read_cached(ticket_id) {
                return Ok(cached);
            }
        }

        let query = [
            ("queueId", queue_id.to_string()),
            ("ticketId", ticket_id.to_string()),
            ("position", position.to_string()),
            ("customerEmail", customer_email.to_string()),
        ];
        let response: EtaTrackResponse = self.eta.get("/eta/track", &query).await?;
        let eta = self.cache.record(
            ticket_id,
            response.estimate(),
            response.remaining(),
            response.updated_at,
        );
        tracing::info!("ETA for {} from server: {:?} min", ticket_id, eta.remaining_minutes);
        Ok(eta)
    }

    /// Decayed estimate from the cache only; rewrites the entry.
    pub fn cached_eta(&self, ticket_id: &str) -> Option<CachedEta> {
        self.cache.read_cached(ticket_id)
    }

    /// Decayed estimate from the cache only; leaves the entry as is.
    pub fn peek_eta(&self, ticket_id: &str) -> Option<CachedEta> {
        self.cache.peek(ticket_id)
    }

    /// Advance `count` tickets past waiting.
    pub async fn process_next(
        &self,
        queue_id: &str,
        count: u32,
    ) -> Result<ProcessNextResponse, ApiError> {
        self.api
            .post(
                &format!("/queues/{}/next", segment(queue_id)),
                &ProcessNextRequest { count },
            )
            .await
    }

    pub async fn create_queue(&self, request: &CreateQueueRequest) -> Result<QueueInfo, ApiError> {
        self.api.post("/queues", request).await
    }
}
