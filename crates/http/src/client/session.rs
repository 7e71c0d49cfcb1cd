//! Seams between the gateway and the application around it
//!
//! The gateway never touches storage, UI or routing directly. It reads the
//! bearer token through a [`CredentialStore`], reports failures through a
//! [`Notifier`] and announces session expiry as a [`SessionEvent`].

use std::sync::Arc;

/// Source of the bearer token attached to outgoing requests
pub trait CredentialStore: Send + Sync {
    /// Current token; an empty string means no session
    fn token(&self) -> String;

    /// Drop the token and profile everywhere they are kept
    fn clear(&self);
}

/// User-visible notification sink for request failures
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(target: "petcare::notify", "{message}");
    }
}

/// Credential store for clients that never authenticate
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialStore for NoCredentials {
    fn token(&self) -> String {
        String::new()
    }

    fn clear(&self) {}
}

/// Session lifecycle events emitted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server rejected the token with 401
    Expired,
}

pub(crate) fn default_notifier() -> Arc<dyn Notifier> {
    Arc::new(TracingNotifier)
}

pub(crate) fn default_credentials() -> Arc<dyn CredentialStore> {
    Arc::new(NoCredentials)
}
