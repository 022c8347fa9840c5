// SPDX-License-Identifier: MPL-2.0
//! Authenticated client for the license resource.
//!
//! [`ResourceClient`] exposes two operations, [`create_license`] and
//! [`list_licenses`]. Each one is a single request/response round trip:
//!
//! - the bearer token is read from the [`TokenProvider`] per request (an
//!   absent token is sent as an empty one)
//! - a successful response must carry a JSON envelope; an empty or falsy body
//!   fails with [`LicenseApiError::Validation`]
//! - a failed exchange becomes [`LicenseApiError::Domain`] holding the server's
//!   `message` when the failure carried one, or the operation's default
//!
//! Nothing is retried and no local state is touched.
//!
//! [`create_license`]: ResourceClient::create_license
//! [`list_licenses`]: ResourceClient::list_licenses

mod error;

pub use error::{LicenseApiError, INVALID_RESPONSE};

use crate::application::port::{HttpRequest, HttpTransport, Method, TokenProvider, TransportError};
use crate::domain::{CreateLicenseRequest, License, ResponseEnvelope};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const CREATE_LICENSE_PATH: &str = "/api/v1/licenses/add";
pub const LIST_LICENSES_PATH: &str = "/api/v1/licenses/get-all";

/// Default failure message for [`ResourceClient::create_license`].
pub const CREATE_LICENSE_FAILED: &str = "License creation failed";
/// Default failure message for [`ResourceClient::list_licenses`].
pub const LIST_LICENSES_FAILED: &str = "Fetching licenses failed";

#[derive(Debug, Clone)]
pub struct ResourceClient<T, P> {
    base_url: String,
    transport: T,
    tokens: P,
}

impl<T: HttpTransport, P: TokenProvider> ResourceClient<T, P> {
    /// Creates a client for the API rooted at `base_url`. A trailing slash is
    /// ignored.
    pub fn new(base_url: impl Into<String>, transport: T, tokens: P) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
            tokens,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a new license.
    ///
    /// The request is forwarded as-is; field validation is the server's job.
    pub async fn create_license(
        &self,
        request: &CreateLicenseRequest,
    ) -> Result<ResponseEnvelope<License>, LicenseApiError> {
        let body = serde_json::to_vec(request)
            .map_err(|_| LicenseApiError::Domain(CREATE_LICENSE_FAILED.to_string()))?;
        let request = self
            .authorized(Method::Post, CREATE_LICENSE_PATH)
            .header("Content-Type", "application/json")
            .body(body);
        self.execute(request, CREATE_LICENSE_FAILED).await
    }

    /// Fetches every license visible to the current token.
    pub async fn list_licenses(&self) -> Result<ResponseEnvelope<Vec<License>>, LicenseApiError> {
        let request = self.authorized(Method::Get, LIST_LICENSES_PATH);
        self.execute(request, LIST_LICENSES_FAILED).await
    }

    fn authorized(&self, method: Method, path: &str) -> HttpRequest {
        let token = self.tokens.token().unwrap_or_default();
        HttpRequest::new(method, format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {token}"))
    }

    async fn execute<D: DeserializeOwned>(
        &self,
        request: HttpRequest,
        default_message: &'static str,
    ) -> Result<ResponseEnvelope<D>, LicenseApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending license request");
        match self.transport.send(request).await {
            Ok(response) => parse_envelope(&response.body),
            Err(err) => Err(failure_from_transport(&err, default_message)),
        }
    }
}

/// Parses a success body into an envelope.
///
/// Empty bodies and JSON values that are falsy (`null`, `false`, `0`, `""`)
/// are rejected, as is anything that is not an envelope with a `message`.
fn parse_envelope<D: DeserializeOwned>(body: &[u8]) -> Result<ResponseEnvelope<D>, LicenseApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| LicenseApiError::invalid_response())?;
    if is_falsy(&value) {
        return Err(LicenseApiError::invalid_response());
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(%err, "response body is not a license envelope");
        LicenseApiError::invalid_response()
    })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Maps a transport failure to the client's error contract.
fn failure_from_transport(err: &TransportError, default_message: &str) -> LicenseApiError {
    tracing::debug!(%err, "license request failed");
    let server_message = err
        .body()
        .and_then(|body| serde_json::from_slice::<Value>(body).ok())
        .and_then(|value| value.get("message")?.as_str().map(str::to_owned))
        .filter(|message| !message.is_empty());
    LicenseApiError::Domain(server_message.unwrap_or_else(|| default_message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::HttpResponse;
    use crate::infrastructure::StaticToken;
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    /// Transport that replays a canned outcome and records the request.
    struct FakeTransport {
        outcome: Result<HttpResponse, TransportError>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn ok(body: &[u8]) -> Self {
            Self::with(Ok(HttpResponse {
                status: 200,
                body: body.to_vec(),
            }))
        }

        fn with(outcome: Result<HttpResponse, TransportError>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> HttpRequest {
            self.seen
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("a request was sent")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
            self.seen.lock().unwrap().push(request);
            let outcome = self.outcome.clone();
            async move { outcome }
        }
    }

    fn sample_request() -> CreateLicenseRequest {
        CreateLicenseRequest {
            purchase_date: "2024-01-01".into(),
            due_date: "2025-01-01".into(),
            details: "x".into(),
            license_plan: "pro".into(),
            duration: 12,
            status: "active".into(),
        }
    }

    fn license_json() -> Value {
        json!({
            "_id": "lic-1",
            "purchase_date": "2024-01-01",
            "due_date": "2025-01-01",
            "details": "x",
            "license_plan": "pro",
            "duration": 12,
            "status": "active"
        })
    }

    fn client(
        transport: FakeTransport,
        token: StaticToken,
    ) -> ResourceClient<FakeTransport, StaticToken> {
        ResourceClient::new("http://api.test/", transport, token)
    }

    fn status_error(status: u16, body: Value) -> TransportError {
        TransportError::Status {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_sends_authenticated_json_post() {
        let body = json!({ "message": "ok", "data": license_json() }).to_string();
        let client = client(FakeTransport::ok(body.as_bytes()), StaticToken::new("abc"));

        client.create_license(&sample_request()).await.unwrap();

        let sent = client.transport.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/api/v1/licenses/add");
        assert_eq!(sent.header_value("Authorization"), Some("Bearer abc"));
        assert_eq!(sent.header_value("Content-Type"), Some("application/json"));
        let sent_body: Value = serde_json::from_slice(&sent.body.unwrap()).unwrap();
        assert_eq!(sent_body["license_plan"], "pro");
        assert_eq!(sent_body["duration"], 12);
    }

    #[tokio::test]
    async fn create_returns_envelope_unchanged() {
        let body = json!({ "message": "ok", "data": license_json() }).to_string();
        let client = client(FakeTransport::ok(body.as_bytes()), StaticToken::new("abc"));

        let envelope = client.create_license(&sample_request()).await.unwrap();

        assert_eq!(envelope.message, "ok");
        let license = envelope.data.expect("license returned");
        assert_eq!(license.id, "lic-1");
        assert_eq!(license.license_plan, "pro");
    }

    #[tokio::test]
    async fn missing_token_is_sent_as_empty_bearer() {
        let body = json!({ "message": "ok", "data": [] }).to_string();
        let client = client(FakeTransport::ok(body.as_bytes()), StaticToken::none());

        client.list_licenses().await.unwrap();

        let sent = client.transport.last_request();
        assert_eq!(sent.header_value("Authorization"), Some("Bearer "));
    }

    #[tokio::test]
    async fn create_uses_server_message_on_failure() {
        let transport = FakeTransport::with(Err(status_error(
            409,
            json!({ "message": "duplicate license" }),
        )));
        let client = client(transport, StaticToken::new("abc"));

        let err = client.create_license(&sample_request()).await.unwrap_err();
        assert_eq!(err, LicenseApiError::Domain("duplicate license".into()));
    }

    #[tokio::test]
    async fn create_falls_back_to_default_message() {
        let transport = FakeTransport::with(Err(TransportError::Network("refused".into())));
        let client = client(transport, StaticToken::new("abc"));

        let err = client.create_license(&sample_request()).await.unwrap_err();
        assert_eq!(err, LicenseApiError::Domain(CREATE_LICENSE_FAILED.into()));
    }

    #[tokio::test]
    async fn failure_body_without_message_uses_default() {
        for body in [json!({ "error": "boom" }), json!({ "message": "" }), json!({ "message": 42 })] {
            let transport = FakeTransport::with(Err(status_error(500, body)));
            let client = client(transport, StaticToken::new("abc"));

            let err = client.list_licenses().await.unwrap_err();
            assert_eq!(err, LicenseApiError::Domain(LIST_LICENSES_FAILED.into()));
        }
    }

    #[tokio::test]
    async fn non_json_failure_body_uses_default() {
        let transport = FakeTransport::with(Err(TransportError::Status {
            status: 502,
            body: b"<html>Bad Gateway</html>".to_vec(),
        }));
        let client = client(transport, StaticToken::new("abc"));

        let err = client.create_license(&sample_request()).await.unwrap_err();
        assert_eq!(err, LicenseApiError::Domain(CREATE_LICENSE_FAILED.into()));
    }

    #[tokio::test]
    async fn list_sends_get_and_returns_sequence() {
        let body = json!({ "message": "ok", "data": [license_json(), license_json()] }).to_string();
        let client = client(FakeTransport::ok(body.as_bytes()), StaticToken::new("abc"));

        let envelope = client.list_licenses().await.unwrap();

        let sent = client.transport.last_request();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.test/api/v1/licenses/get-all");
        assert!(sent.body.is_none());
        assert_eq!(envelope.data.map(|d| d.len()), Some(2));
    }

    #[tokio::test]
    async fn list_uses_server_message_on_failure() {
        let transport = FakeTransport::with(Err(status_error(401, json!({ "message": "unauthorized" }))));
        let client = client(transport, StaticToken::none());

        let err = client.list_licenses().await.unwrap_err();
        assert_eq!(err, LicenseApiError::Domain("unauthorized".into()));
    }

    #[tokio::test]
    async fn envelope_without_data_is_not_an_error() {
        let client = client(
            FakeTransport::ok(br#"{"message":"no licenses yet"}"#),
            StaticToken::new("abc"),
        );

        let envelope = client.list_licenses().await.unwrap();
        assert_eq!(envelope.message, "no licenses yet");
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn falsy_bodies_are_validation_errors() {
        let bodies: [&[u8]; 6] = [b"", b"   ", b"null", b"false", b"0", b"\"\""];
        for body in bodies {
            let client = client(FakeTransport::ok(body), StaticToken::new("abc"));

            let err = client.create_license(&sample_request()).await.unwrap_err();
            assert_eq!(err, LicenseApiError::Validation(INVALID_RESPONSE.into()));

            let err = client.list_licenses().await.unwrap_err();
            assert_eq!(err, LicenseApiError::Validation(INVALID_RESPONSE.into()));
        }
    }

    #[tokio::test]
    async fn body_that_is_not_an_envelope_is_a_validation_error() {
        let client = client(FakeTransport::ok(b"<html>ok</html>"), StaticToken::new("abc"));
        let err = client.list_licenses().await.unwrap_err();
        assert_eq!(err, LicenseApiError::Validation(INVALID_RESPONSE.into()));
    }

    #[test]
    fn trailing_slashes_are_trimmed_from_base_url() {
        let client = ResourceClient::new("http://api.test///", FakeTransport::ok(b""), StaticToken::none());
        assert_eq!(client.base_url(), "http://api.test");
    }
}
