//! Error taxonomy for calls to the SmartQueue backend.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Network(String),

    /// The transport gave up after the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The backend answered 401. Persisted client state has been wiped.
    #[error("Unauthorized")]
    Unauthorized {
        /// `error`/`message` field from the response body, if any
        message: Option<String>,
    },

    /// Any other non-success status.
    #[error("Server returned status {status}")]
    Status {
        status: u16,
        /// `error`/`message` field from the response body, if any
        message: Option<String>,
    },

    /// The body decoded, but lacks something the client requires.
    #[error("{0}")]
    InvalidResponse(String),

    /// The body does not match the expected schema.
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text to show the user: the backend's message, or `fallback`.
    ///
    /// Invalid-response errors carry their own text and show it instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::InvalidResponse(text) => text.clone(),
            other => other
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Whether a read is worth attempting again.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Queue is closed".to_string()),
        };
        assert_eq!(err.user_message("Failed to join queue"), "Queue is closed");

        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to join queue"), "Failed to join queue");

        assert_eq!(ApiError::Timeout.user_message("Failed"), "Failed");
    }

    #[test]
    fn test_invalid_response_shows_own_text() {
        let err = ApiError::InvalidResponse("Invalid login response from server".to_string());
        assert_eq!(err.user_message("Wrong email or password"), "Invalid login response from server");
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::Network("reset".into()).is_retryable());
        assert!(ApiError::Status { status: 503, message: None }.is_retryable());
        assert!(!ApiError::Status { status: 404, message: None }.is_retryable());
        assert!(!ApiError::Unauthorized { message: None }.is_retryable());
        assert!(!ApiError::Decode("eof".into()).is_retryable());
    }
}
