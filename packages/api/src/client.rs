//! # HTTP client root
//!
//! [`HttpClient`] is one API root: a base URL, a per-request timeout, a read
//! retry budget, and optionally the unauthorized rule. The gateway builds two of
//! them, one for the user/queue service and one for the ETA service.
//!
//! ## Response handling
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | Body decoded into the requested type, or [`ApiError::Decode`]. |
//! | 401 | Unauthorized handler runs (if set), then [`ApiError::Unauthorized`]. |
//! | other | [`ApiError::Status`] with the body's `error`/`message` text. |
//!
//! `GET`s are attempted `1 + read_retries` times while the failure is a
//! transport error or a 5xx. `POST`s are sent exactly once.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::config::EndpointConfig;

use crate::error::ApiError;
use crate::schema::ErrorBody;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Percent-encode one path segment taken from an identifier.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Callback run whenever the backend answers 401.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// One configured API root over a [`Transport`].
#[derive(Clone)]
pub struct HttpClient<T: Transport> {
    transport: T,
    base_url: String,
    timeout: Duration,
    read_retries: u32,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl<T: Transport> std::fmt::Debug for HttpClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("read_retries", &self.read_retries)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T, config: &EndpointConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(config.timeout_ms),
            read_retries: config.read_retries,
            on_unauthorized: None,
        }
    }

    pub fn set_unauthorized_handler(&mut self, handler: UnauthorizedHandler) {
        self.on_unauthorized = Some(handler);
    }

    /// Absolute URL for a path below this root.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `GET path?query`, retried on transient failures.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(path),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: None,
            timeout: self.timeout,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let result = self.execute(request.clone()).await;
            match result {
                Err(e) if e.is_retryable() && attempt <= self.read_retries => {
                    tracing::warn!("GET {} failed ({}), retrying", request.url, e);
                }
                other => return other,
            }
        }
    }

    /// `POST path` with a JSON body. Never retried.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(path),
            query: Vec::new(),
            body: Some(body),
            timeout: self.timeout,
        };
        self.execute(request).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        tracing::debug!("{:?} {}", request.method, request.url);
        let response = self.transport.send(request).await.map_err(|e| match e {
            TransportError::Timeout => ApiError::Timeout,
            TransportError::Connection(msg) => ApiError::Network(msg),
        })?;
        self.handle(response)
    }

    fn handle<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        match response.status {
            200..=299 => serde_json::from_str(&response.body)
                .map_err(|e| ApiError::Decode(e.to_string())),
            401 => {
                if let Some(handler) = &self.on_unauthorized {
                    tracing::info!("Unauthorized response, clearing client state");
                    handler();
                }
                Err(ApiError::Unauthorized {
                    message: ErrorBody::extract(&response.body),
                })
            }
            status => Err(ApiError::Status {
                status,
                message: ErrorBody::extract(&response.body),
            }),
        }
    }
}
