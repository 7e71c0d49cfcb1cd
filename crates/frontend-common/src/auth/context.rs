//! Session store: the single owner of the token and user profile

use crate::config::AuthConfig;
use crate::storage::{Storage, StorageError};
use petcare_http::types::{LoginRequest, TokenResponse, UserProfile};
use petcare_http::{ClientError, CredentialStore, PetCareClient};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token; empty when signed out
    pub token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// In-memory session mirrored to durable storage
///
/// Every setter writes storage while holding the write lock, so readers
/// never observe memory and storage out of step.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Restore the session persisted in `storage`
    ///
    /// A missing token becomes empty; a missing or unparsable profile
    /// becomes `None`.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let token = storage.get_item(AuthConfig::TOKEN_KEY).unwrap_or_default();
        let user = storage
            .get_item(AuthConfig::USER_KEY)
            .and_then(|raw| match serde_json::from_str::<Option<UserProfile>>(&raw) {
                Ok(user) => user,
                Err(error) => {
                    tracing::warn!("Discarding unreadable stored user profile: {error}");
                    None
                }
            });

        tracing::debug!(
            authenticated = !token.is_empty(),
            has_user = user.is_some(),
            "Session restored from storage"
        );

        Self {
            state: RwLock::new(Session { token, user }),
            storage,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    /// Current token; empty when signed out
    pub fn token(&self) -> String {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Replace the token in memory and storage
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut state = self.write();
        log_storage_failure(
            "token",
            self.storage.set_item(AuthConfig::TOKEN_KEY, &token),
        );
        state.token = token;
    }

    /// Replace the profile in memory and storage; `None` removes the key
    pub fn set_user(&self, user: Option<UserProfile>) {
        let mut state = self.write();
        self.persist_user(user.as_ref());
        state.user = user;
    }

    fn persist_user(&self, user: Option<&UserProfile>) {
        let persisted = match user {
            Some(profile) => serde_json::to_string(profile)
                .map_err(StorageError::from)
                .and_then(|raw| self.storage.set_item(AuthConfig::USER_KEY, &raw)),
            None => self.storage.remove_item(AuthConfig::USER_KEY),
        };
        log_storage_failure("user", persisted);
    }

    /// Install a fresh token and profile as one update
    fn commit(&self, token: String, user: UserProfile) {
        let mut state = self.write();
        log_storage_failure(
            "token",
            self.storage.set_item(AuthConfig::TOKEN_KEY, &token),
        );
        self.persist_user(Some(&user));
        *state = Session {
            token,
            user: Some(user),
        };
    }

    /// Sign in with username and password
    ///
    /// Returns `Ok(false)` without touching the session when the server
    /// answers without a payload.
    ///
    /// # Errors
    ///
    /// Propagates any gateway failure; the session is left unchanged.
    pub async fn login(
        &self,
        client: &PetCareClient,
        credentials: &LoginRequest,
    ) -> Result<bool, ClientError> {
        let envelope = client.login(credentials).await?;
        let Some(TokenResponse {
            access_token, user, ..
        }) = envelope.data
        else {
            tracing::info!(username = %credentials.username, "Login answered without a session");
            return Ok(false);
        };

        tracing::info!(username = %user.username, role = ?user.role, "Logged in");
        self.commit(access_token, user);
        Ok(true)
    }

    /// Sign out locally: forget the token and profile everywhere
    pub fn logout(&self) {
        let mut state = self.write();
        log_storage_failure("token", self.storage.remove_item(AuthConfig::TOKEN_KEY));
        log_storage_failure("user", self.storage.remove_item(AuthConfig::USER_KEY));
        *state = Session::default();
        tracing::info!("Session cleared");
    }

    /// Refresh the profile of the signed-in user
    ///
    /// # Errors
    ///
    /// Propagates any gateway failure.
    pub async fn fetch_user_info(
        &self,
        client: &PetCareClient,
    ) -> Result<Option<UserProfile>, ClientError> {
        let envelope = client.current_user().await?;
        let Some(user) = envelope.data else {
            return Ok(None);
        };
        self.set_user(Some(user.clone()));
        Ok(Some(user))
    }
}

impl CredentialStore for SessionStore {
    fn token(&self) -> String {
        Self::token(self)
    }

    fn clear(&self) {
        self.logout();
    }
}

fn log_storage_failure(key: &str, result: Result<(), StorageError>) {
    if let Err(error) = result {
        tracing::warn!(key, "Failed to persist session: {error}");
    }
}
