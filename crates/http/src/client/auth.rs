//! Authentication API client methods

use super::{ClientError, PetCareClient};
use crate::types::{Envelope, LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use reqwest::Method;

impl PetCareClient {
    /// Exchange username and password for an access token
    pub async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<Envelope<TokenResponse>, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(request).await
    }

    /// Register a new pet owner account
    pub async fn register(
        &self,
        registration: &RegisterRequest,
    ) -> Result<Envelope<UserProfile>, ClientError> {
        let request = self
            .request(Method::POST, "/auth/register")
            .json(registration);
        self.execute(request).await
    }

    /// Fetch the profile of the authenticated user
    pub async fn current_user(&self) -> Result<Envelope<UserProfile>, ClientError> {
        let request = self.request(Method::GET, "/auth/me");
        self.execute(request).await
    }
}
