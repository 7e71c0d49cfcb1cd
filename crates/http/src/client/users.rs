//! User management client methods (administrators only)

use super::{ClientError, PetCareClient};
use crate::types::{Envelope, Page, UserCreate, UserProfile, UserQuery, UserUpdate};
use reqwest::Method;

impl PetCareClient {
    pub async fn list_users(
        &self,
        query: &UserQuery,
    ) -> Result<Envelope<Page<UserProfile>>, ClientError> {
        let request = self.request(Method::GET, "/users").query(query);
        self.execute(request).await
    }

    pub async fn get_user(&self, id: i64) -> Result<Envelope<UserProfile>, ClientError> {
        let request = self.request(Method::GET, &format!("/users/{id}"));
        self.execute(request).await
    }

    pub async fn create_user(&self, user: &UserCreate) -> Result<Envelope<UserProfile>, ClientError> {
        let request = self.request(Method::POST, "/users").json(user);
        self.execute(request).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        update: &UserUpdate,
    ) -> Result<Envelope<UserProfile>, ClientError> {
        let request = self.request(Method::PUT, &format!("/users/{id}")).json(update);
        self.execute(request).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/users/{id}"));
        self.execute(request).await
    }
}
