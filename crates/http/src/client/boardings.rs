//! Boarding client methods

use super::{ClientError, PetCareClient};
use crate::types::{Boarding, BoardingCreate, BoardingQuery, BoardingUpdate, Envelope, Page};
use reqwest::Method;

impl PetCareClient {
    pub async fn list_boardings(
        &self,
        query: &BoardingQuery,
    ) -> Result<Envelope<Page<Boarding>>, ClientError> {
        let request = self.request(Method::GET, "/boardings").query(query);
        self.execute(request).await
    }

    pub async fn get_boarding(&self, id: i64) -> Result<Envelope<Boarding>, ClientError> {
        let request = self.request(Method::GET, &format!("/boardings/{id}"));
        self.execute(request).await
    }

    pub async fn create_boarding(
        &self,
        boarding: &BoardingCreate,
    ) -> Result<Envelope<Boarding>, ClientError> {
        let request = self.request(Method::POST, "/boardings").json(boarding);
        self.execute(request).await
    }

    pub async fn update_boarding(
        &self,
        id: i64,
        update: &BoardingUpdate,
    ) -> Result<Envelope<Boarding>, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/boardings/{id}"))
            .json(update);
        self.execute(request).await
    }

    pub async fn delete_boarding(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/boardings/{id}"));
        self.execute(request).await
    }
}
