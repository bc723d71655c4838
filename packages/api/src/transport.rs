//! # HTTP transport seam
//!
//! [`Transport`] sends one fully-built request and hands back the raw status and
//! body. Everything above it (base paths, retries, the unauthorized rule, schema
//! decoding) lives in [`crate::client::HttpClient`], so it can be exercised
//! against a recording fake in tests.
//!
//! [`ReqwestTransport`] is the real implementation. `reqwest` uses `fetch` on
//! WASM and hyper on native, so the same code serves the browser and tests.

use std::time::Duration;

/// HTTP verbs the client uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL without query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<String>,
    pub timeout: Duration,
}

/// Status and body of a response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure below HTTP: nothing came back.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportError {
    Timeout,
    Connection(String),
}

/// Async trait for sending HTTP requests.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>>;
}

/// `reqwest`-backed Transport.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Connection(e.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        builder = builder
            .header("Content-Type", "application/json")
            .timeout(request.timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
