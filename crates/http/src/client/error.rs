//! Client error types

use thiserror::Error;

/// Message used when the server gives no usable one
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// Message shown when the session token is rejected
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again";

/// Message shown when no response was received at all
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please try again later";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The envelope carried a non-success business code
    ///
    /// `code` is `None` when the server sent `null` or a non-integer code.
    #[error("{message}")]
    Business { code: Option<i64>, message: String },

    /// The server answered 401; the session has been torn down
    #[error("{message}")]
    AuthExpired { message: String },

    /// The server answered with any other non-2xx status
    #[error("Server error {status}: {message}")]
    Http { status: u16, message: String },

    /// No response was received (connect failure, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A 2xx body could not be decoded into the expected envelope
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from a non-success HTTP status
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status.as_u16() {
            401 => Self::AuthExpired {
                message: SESSION_EXPIRED_MESSAGE.to_string(),
            },
            code => Self::Http {
                status: code,
                message: message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            },
        }
    }

    /// Create error from an envelope with a failing business code
    pub fn business(code: Option<i64>, message: Option<&str>) -> Self {
        Self::Business {
            code,
            message: message.unwrap_or(FALLBACK_MESSAGE).to_string(),
        }
    }

    /// Whether the server rejected the session token
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired { .. })
    }

    /// HTTP status, when a response was received with a non-2xx status
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthExpired { .. } => Some(401),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Business { message, .. }
            | Self::AuthExpired { message }
            | Self::Http { message, .. } => message.clone(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Decode(_) | Self::Configuration(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_unauthorized_maps_to_auth_expired() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, Some("bad token".into()));
        assert!(error.is_auth_expired());
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.user_message(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_other_status_keeps_server_message() {
        let error = ClientError::from_status(StatusCode::FORBIDDEN, Some("nope".into()));
        assert!(matches!(error, ClientError::Http { status: 403, ref message } if message == "nope"));
    }

    #[test]
    fn test_status_without_message_uses_fallback() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(error.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_business_error_displays_message() {
        let error = ClientError::business(Some(400), Some("Username already exists"));
        assert_eq!(error.to_string(), "Username already exists");
        assert_eq!(error.status(), None);

        let error = ClientError::business(Some(500), None);
        assert_eq!(error.to_string(), FALLBACK_MESSAGE);
    }
}
