//! # Domain models for users, queues and tickets
//!
//! These are the records the SmartQueue backend hands to the client. They are
//! `Serialize + Deserialize` with camelCase field names so the same types decode
//! HTTP responses in `api` and round-trip through client-side storage here.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The logged-in identity kept in the session store. |
//! | [`QueueInfo`] | A service queue as listed on the dashboard. Owned by the backend. |
//! | [`Ticket`] | A user's place in a queue, created by the backend on join. |
//!
//! Fields the backend is known to omit (ticket status, contact fields, queue
//! description) are `#[serde(default)]`, so a partial record still decodes while a
//! record missing its identifiers is rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Get display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A service queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueInfo {
    pub queue_id: String,
    /// The queue service calls this `queueName`.
    #[serde(alias = "queueName")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_waiting_count: u32,
    #[serde(default)]
    pub average_service_time_minutes: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// Lifecycle state of a ticket. Transitions are owned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Waiting,
    Served,
    Cancelled,
    Notified,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Waiting => "WAITING",
            TicketStatus::Served => "SERVED",
            TicketStatus::Cancelled => "CANCELLED",
            TicketStatus::Notified => "NOTIFIED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's claimed place in a queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: String,
    pub queue_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub status: TicketStatus,
    /// 1-based rank in the queue.
    pub position: u32,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub estimated_wait_minutes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_status_defaults_to_waiting() {
        let json = r#"{"ticketId":"t1","queueId":"q1","position":3}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::Waiting);
        assert_eq!(ticket.position, 3);
        assert!(ticket.joined_at.is_none());
    }

    #[test]
    fn test_ticket_requires_identifiers() {
        let json = r#"{"queueId":"q1","position":3}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_ticket_status_wire_names() {
        let json = r#"{"ticketId":"t1","queueId":"q1","position":1,"status":"NOTIFIED"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::Notified);
        assert_eq!(ticket.status.to_string(), "NOTIFIED");
    }

    #[test]
    fn test_queue_accepts_queue_name_alias() {
        let json = r#"{"queueId":"q1","queueName":"Pharmacy","isActive":true}"#;
        let queue: QueueInfo = serde_json::from_str(json).unwrap();
        assert_eq!(queue.name, "Pharmacy");
        assert!(queue.is_active);
        assert_eq!(queue.current_waiting_count, 0);
    }

    #[test]
    fn test_user_display_name() {
        let named = User::new("u1", "a@b.c", "Ann");
        assert_eq!(named.display_name(), "Ann");
        let anonymous = User::new("u2", "x@y.z", "");
        assert_eq!(anonymous.display_name(), "x@y.z");
    }
}
