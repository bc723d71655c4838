//! # Wire schemas, one per endpoint
//!
//! Request bodies and response shapes of the SmartQueue backend. Responses are
//! decoded straight into these types, so a malformed payload fails at the
//! boundary as [`crate::ApiError::Decode`] instead of surfacing later as a
//! missing field.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST /v1/users/register` | [`RegisterRequest`] | [`store::User`] |
//! | `POST /v1/users/login` | [`LoginRequest`] | [`LoginResponse`] |
//! | `GET /v1/users/{id}/tickets` | — | `Vec<`[`store::Ticket`]`>` |
//! | `GET /queues` | — | `Vec<`[`store::QueueInfo`]`>` |
//! | `GET /queues/{id}` | — | [`store::QueueInfo`] |
//! | `POST /queues` | [`CreateQueueRequest`] | [`store::QueueInfo`] |
//! | `POST /queues/{id}/join` | [`JoinQueueRequest`] | [`store::Ticket`] |
//! | `GET /queues/{id}/status?ticketId=` | — | [`TicketStatusResponse`] |
//! | `POST /queues/{id}/next` | [`ProcessNextRequest`] | [`ProcessNextResponse`] |
//! | `GET /eta/track?queueId=&ticketId=&position=&customerEmail=` | — | [`EtaTrackResponse`] |
//!
//! Error bodies of any endpoint are read as [`ErrorBody`].

use serde::{Deserialize, Serialize};
use store::eta_cache::whole_minutes;
use store::{ServerTimestamp, Ticket, TicketStatus, User};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login answers with the user nested under `user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub email_notification_enabled: bool,
    pub sms_notification_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinQueueRequest {
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueueRequest {
    pub queue_id: String,
    pub queue_name: String,
    pub max_capacity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessNextRequest {
    pub count: u32,
}

/// Result of advancing a queue.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNextResponse {
    #[serde(default)]
    pub queue_id: Option<String>,
    #[serde(default)]
    pub processed_count: Option<u32>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Current state of one ticket as reported by the queue service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStatusResponse {
    pub queue_id: String,
    pub ticket_id: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub estimated_wait_minutes: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// ETA tracking response. Minutes may arrive as integers or floats.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaTrackResponse {
    #[serde(default)]
    pub remaining_minutes: Option<f64>,
    #[serde(default)]
    pub estimated_wait_minutes: Option<f64>,
    #[serde(default)]
    pub eta: Option<f64>,
    #[serde(default)]
    pub p50_wait_minutes: Option<f64>,
    #[serde(default)]
    pub p90_wait_minutes: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<ServerTimestamp>,
}

impl EtaTrackResponse {
    /// First present of remaining, estimated, generic `eta`.
    pub fn estimate(&self) -> Option<u32> {
        self.remaining_minutes
            .or(self.estimated_wait_minutes)
            .or(self.eta)
            .map(whole_minutes)
    }

    /// Remaining minutes, else the estimate; the generic `eta` is not used here.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining_minutes
            .or(self.estimated_wait_minutes)
            .map(whole_minutes)
    }
}

/// Error body shape shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort message from an error response body.
    pub fn extract(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eta_field_precedence() {
        let both: EtaTrackResponse =
            serde_json::from_str(r#"{"remainingMinutes":4,"estimatedWaitMinutes":9}"#).unwrap();
        assert_eq!(both.estimate(), Some(4));
        assert_eq!(both.remaining(), Some(4));

        let estimated: EtaTrackResponse =
            serde_json::from_str(r#"{"estimatedWaitMinutes":9.4,"p90WaitMinutes":12}"#).unwrap();
        assert_eq!(estimated.estimate(), Some(10));
        assert_eq!(estimated.remaining(), Some(10));

        let generic: EtaTrackResponse = serde_json::from_str(r#"{"eta":6}"#).unwrap();
        assert_eq!(generic.estimate(), Some(6));
        assert_eq!(generic.remaining(), None);

        let empty: EtaTrackResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.estimate(), None);
    }

    #[test]
    fn test_eta_updated_at_forms() {
        let text: EtaTrackResponse =
            serde_json::from_str(r#"{"eta":1,"updatedAt":"2024-05-01T10:00:00Z"}"#).unwrap();
        assert_eq!(
            text.updated_at,
            Some(ServerTimestamp::Text("2024-05-01T10:00:00Z".to_string()))
        );

        let epoch: EtaTrackResponse =
            serde_json::from_str(r#"{"eta":1,"updatedAt":1714557600.5}"#).unwrap();
        assert_eq!(epoch.updated_at, Some(ServerTimestamp::Epoch(1714557600.5)));
    }

    #[test]
    fn test_login_response_without_user() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"message":"Login successful"}"#).unwrap();
        assert!(parsed.user.is_none());
    }

    #[test]
    fn test_register_request_wire_names() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "+84333138386".into(),
            password: "Secret123".into(),
            email_notification_enabled: true,
            sms_notification_enabled: false,
        })
        .unwrap();
        assert_eq!(body["emailNotificationEnabled"], true);
        assert_eq!(body["smsNotificationEnabled"], false);
        assert_eq!(body["phone"], "+84333138386");
    }

    #[test]
    fn test_error_body_extract() {
        assert_eq!(
            ErrorBody::extract(r#"{"error":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            ErrorBody::extract(r#"{"message":"Failed to join queue: full"}"#).as_deref(),
            Some("Failed to join queue: full")
        );
        assert!(ErrorBody::extract("<html>").is_none());
        assert!(ErrorBody::extract(r#"{"message":"  "}"#).is_none());
    }
}
