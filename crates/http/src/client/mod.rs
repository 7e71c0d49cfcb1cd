//! Pet care HTTP client
//!
//! [`PetCareClient`] is the single gateway every API call passes through.
//! Outgoing requests get the session's bearer token attached; every
//! response is checked for transport failures and for the business code in
//! the `{code, msg, data}` envelope. Failures are reported to the injected
//! [`Notifier`] and returned to the caller, and a 401 tears the session
//! down and broadcasts [`SessionEvent::Expired`].

pub mod auth;
pub mod boardings;
pub mod dashboard;
pub mod error;
pub mod health_records;
pub mod orders;
pub mod pets;
pub mod services;
pub mod session;
pub mod users;

use crate::types::{Envelope, SUCCESS_CODE};
use error::ClientError;
use reqwest::{Client, ClientBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use session::{CredentialStore, Notifier, SessionEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Path prefix of every API endpoint
pub const API_PREFIX: &str = "/api";

/// Timeout applied to every call unless the builder overrides it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const DEFAULT_USER_AGENT: &str = concat!("petcare-client/", env!("CARGO_PKG_VERSION"));
const EVENT_CAPACITY: usize = 16;

/// Pet care API client
#[derive(Clone)]
pub struct PetCareClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    events: broadcast::Sender<SessionEvent>,
}

impl PetCareClient {
    /// Create an unauthenticated client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> PetCareClientBuilder {
        PetCareClientBuilder::default()
    }

    /// Get the base URL (origin, without the API prefix)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subscribe to session lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Create a request builder for an API path, attaching the session token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{API_PREFIX}{path}", self.base_url);
        let token = self.credentials.token();
        tracing::debug!(%method, %url, authenticated = !token.is_empty(), "Preparing request");

        let request = self.client.request(method, url);
        if token.is_empty() {
            request
        } else {
            request.header(header::AUTHORIZATION, format!("Bearer {token}"))
        }
    }

    /// Send a request and unwrap the response envelope
    ///
    /// The whole envelope is returned on success, including `code` and
    /// `msg`. Every failure has already been reported to the notifier by
    /// the time it is returned.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ClientError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => return Err(self.network_failure(error)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(self.http_failure(status, response).await);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(error) => return Err(self.network_failure(error)),
        };
        self.unwrap_envelope(&body)
    }

    fn unwrap_envelope<T: DeserializeOwned>(&self, body: &[u8]) -> Result<Envelope<T>, ClientError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope {
                code: None,
                msg: None,
                data: None,
            });
        }

        let raw: Value =
            serde_json::from_slice(body).map_err(|error| self.decode_failure(error))?;

        // Only an object can carry a code; any other body has none to check
        let Value::Object(mut fields) = raw else {
            return Ok(Envelope {
                code: None,
                msg: None,
                data: None,
            });
        };

        let msg = match fields.remove("msg") {
            Some(Value::String(msg)) => Some(msg),
            _ => None,
        };

        // An absent code is success; a present one must be exactly 200
        let code = match fields.remove("code") {
            None => None,
            Some(code) if code.as_i64() == Some(SUCCESS_CODE) => Some(SUCCESS_CODE),
            Some(code) => {
                let message = msg.as_deref().filter(|msg| !msg.is_empty());
                return Err(self.business_failure(code.as_i64(), message));
            }
        };

        let data = fields
            .remove("data")
            .filter(|data| !data.is_null())
            .map(serde_json::from_value)
            .transpose()
            .map_err(|error| self.decode_failure(error))?;

        Ok(Envelope { code, msg, data })
    }

    fn business_failure(&self, code: Option<i64>, message: Option<&str>) -> ClientError {
        let error = ClientError::business(code, message);
        tracing::warn!(?code, message = %error, "Request rejected by server");
        self.notifier.error(&error.user_message());
        error
    }

    async fn http_failure(&self, status: StatusCode, response: Response) -> ClientError {
        let message = response
            .json::<Envelope<Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.msg)
            .filter(|msg| !msg.is_empty());

        let error = ClientError::from_status(status, message);
        tracing::warn!(status = status.as_u16(), "Request failed: {error}");
        self.notifier.error(&error.user_message());

        if error.is_auth_expired() {
            self.expire_session();
        }
        error
    }

    fn network_failure(&self, error: reqwest::Error) -> ClientError {
        tracing::warn!(timeout = error.is_timeout(), "No response from server: {error}");
        let error = ClientError::Network(error);
        self.notifier.error(&error.user_message());
        error
    }

    fn decode_failure(&self, error: serde_json::Error) -> ClientError {
        tracing::warn!("Undecodable response body: {error}");
        let error = ClientError::Decode(error);
        self.notifier.error(&error.user_message());
        error
    }

    fn expire_session(&self) {
        tracing::info!("Session rejected by server, clearing credentials");
        self.credentials.clear();
        // Nobody listening is not an error
        let _ = self.events.send(SessionEvent::Expired);
    }
}

/// Builder for `PetCareClient`
#[derive(Default)]
pub struct PetCareClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    credentials: Option<Arc<dyn CredentialStore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl PetCareClientBuilder {
    /// Set the server origin, e.g. `http://127.0.0.1:8000`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set where the bearer token comes from
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the sink for user-visible failure notifications
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PetCareClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()
            .map_err(|error| ClientError::Configuration(error.to_string()))?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(PetCareClient {
            client,
            base_url,
            credentials: self.credentials.unwrap_or_else(session::default_credentials),
            notifier: self.notifier.unwrap_or_else(session::default_notifier),
            events,
        })
    }
}
