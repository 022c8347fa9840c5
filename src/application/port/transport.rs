// SPDX-License-Identifier: MPL-2.0
//! HTTP transport port.
//!
//! The license client builds [`HttpRequest`]s and hands them to an
//! [`HttpTransport`]. Adapters report non-success statuses as
//! [`TransportError::Status`] so the client can read the server's message
//! from the body.

use std::fmt;
use std::future::Future;

// =============================================================================
// Request / Response
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Outgoing request handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the first header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

// =============================================================================
// TransportError
// =============================================================================

/// Failure reported by a transport adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-success status. The body is kept as-is.
    Status { status: u16, body: Vec<u8> },
    /// No response was received (connection refused, TLS failure, ...).
    Network(String),
}

impl TransportError {
    /// Returns the response body, if the failure carried one.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            TransportError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Status { status, .. } => write!(f, "HTTP status: {status}"),
            TransportError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// HttpTransport
// =============================================================================

/// Sends one request and resolves with the response.
///
/// No retries and no timeouts are expected from implementations beyond what
/// the underlying HTTP stack applies on its own.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
