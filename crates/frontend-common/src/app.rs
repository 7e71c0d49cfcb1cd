//! Application shell wiring the session store, gateway and router together

use crate::auth::SessionStore;
use crate::auth_guard::AuthGuard;
use crate::config::{AppConfig, AuthConfig};
use crate::error::Result;
use crate::router::{RouteDescriptor, Router};
use crate::storage::{FileStorage, Storage};
use petcare_http::types::{LoginRequest, UserProfile};
use petcare_http::{ClientError, Notifier, PetCareClient, SessionEvent};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Root object of the admin client
///
/// Owns the one session store; the gateway and the guard only ever see it
/// through the handles passed in here.
pub struct App {
    session: Arc<SessionStore>,
    client: PetCareClient,
    router: Mutex<Router>,
    events: Mutex<broadcast::Receiver<SessionEvent>>,
}

impl App {
    /// Assemble the shell around an existing storage backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn new(
        config: &AppConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let session = Arc::new(SessionStore::load(storage));
        let client = PetCareClient::builder()
            .base_url(config.api.base_url.clone())
            .timeout(config.api.timeout())
            .credentials(session.clone())
            .notifier(notifier)
            .build()?;
        let events = client.subscribe();
        let router = Router::new(AuthGuard::new(session.clone()));

        Ok(Self {
            session,
            client,
            router: Mutex::new(router),
            events: Mutex::new(events),
        })
    }

    /// Assemble the shell with the session file named in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be read or the HTTP
    /// client cannot be built.
    pub fn open(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let storage = FileStorage::open(&config.storage.path)?;
        Self::new(config, Arc::new(storage), notifier)
    }

    pub const fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub const fn client(&self) -> &PetCareClient {
        &self.client
    }

    fn router(&self) -> MutexGuard<'_, Router> {
        self.router.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_route(&self) -> Option<&'static RouteDescriptor> {
        self.router().current()
    }

    /// Navigate through the auth guard
    ///
    /// # Errors
    ///
    /// Returns an error for unknown paths.
    pub fn navigate(&self, path: &str) -> Result<&'static RouteDescriptor> {
        Ok(self.router().push(path)?)
    }

    /// Sign in and, on success, move on to the home page
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<bool> {
        let logged_in = self
            .with_session_handling(self.session.login(&self.client, credentials))
            .await?;
        if logged_in {
            self.navigate(AuthConfig::HOME_PATH)?;
        }
        Ok(logged_in)
    }

    /// Refresh the signed-in user's profile
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn fetch_user_info(&self) -> Result<Option<UserProfile>> {
        Ok(self
            .with_session_handling(self.session.fetch_user_info(&self.client))
            .await?)
    }

    /// Sign out and return to the login page
    pub fn logout(&self) {
        self.session.logout();
        self.redirect_to_login();
    }

    /// Await a gateway call, then apply any session events it caused
    ///
    /// # Errors
    ///
    /// Returns the call's own error unchanged.
    pub async fn with_session_handling<T, F>(&self, call: F) -> std::result::Result<T, ClientError>
    where
        F: Future<Output = std::result::Result<T, ClientError>>,
    {
        let result = call.await;
        self.process_session_events();
        result
    }

    /// Apply pending session events; returns how many were handled
    pub fn process_session_events(&self) -> usize {
        let mut handled = 0;
        loop {
            let event = self
                .events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .try_recv();
            match event {
                Ok(SessionEvent::Expired) => {}
                // Every event ends in the same redirect, so missed ones do not matter
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Session events lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
            handled += 1;
            self.redirect_to_login();
        }
        handled
    }

    fn redirect_to_login(&self) {
        match self.navigate(AuthConfig::LOGIN_PATH) {
            Ok(route) => tracing::info!(to = route.path, "Redirected to login"),
            Err(error) => tracing::warn!("Could not open login page: {error}"),
        }
    }
}
