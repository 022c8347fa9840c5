// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed [`HttpTransport`].

use crate::application::port::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use std::future::Future;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// HTTP transport over a shared `reqwest::Client`.
///
/// Non-2xx responses are returned as [`TransportError::Status`] with the body
/// intact; anything that prevents a response from arriving becomes
/// [`TransportError::Network`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with an explicit redirect policy and user agent.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        let client = self.client.clone();
        async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
            };

            let mut builder = client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?
                .to_vec();

            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(HttpResponse {
                status: status.as_u16(),
                body,
            })
        }
    }
}
