//! # API crate: SmartQueue backend client
//!
//! Everything the frontends need to talk to the SmartQueue backend: two HTTP
//! roots over an injectable transport, typed request/response schemas, and the
//! queue, user and dashboard operations built on them. Client-side state (the
//! session and the ETA cache) lives in the `store` crate and is handed in.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] seam and its `reqwest` implementation |
//! | [`client`] | [`HttpClient`]: base URL, timeout, read retries, 401 rule, status mapping |
//! | [`schema`] | Request bodies and response shapes, one per endpoint |
//! | [`error`] | [`ApiError`] and the user-facing message rule |
//! | [`queue`] | Queue operations and ETA tracking over the cache |
//! | [`user`] | Register, login, logout, the user's tickets |
//! | [`gateway`] | [`SmartQueue`]: wires both roots, the session and the cache over one store |
//! | [`dashboard`] | Refresh-all, join-then-track, the local ETA tick |
//!
//! ## Network calls per dashboard action
//!
//! - **Refresh all**: queue list and ticket list; ETAs come from the cache.
//! - **Join**: the join itself, then exactly one forced ETA request.
//! - **Tick**: none.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod queue;
pub mod schema;
pub mod transport;
pub mod user;

#[cfg(test)]
mod mock;

pub use client::HttpClient;
pub use dashboard::{estimated_progress, DashboardRefresh, JoinedTicket, TicketView};
pub use error::ApiError;
pub use gateway::SmartQueue;
pub use queue::QueueService;
pub use schema::{CreateQueueRequest, RegisterRequest};
pub use transport::{ReqwestTransport, Transport};
pub use user::UserService;

pub use store::{CachedEta, QueueInfo, SmartQueueConfig, Ticket, TicketStatus, User};
