//! Pet record client methods

use super::{ClientError, PetCareClient};
use crate::types::{Envelope, Page, Pet, PetCreate, PetQuery, PetUpdate};
use reqwest::Method;

impl PetCareClient {
    /// List pets; owners only ever see their own
    pub async fn list_pets(&self, query: &PetQuery) -> Result<Envelope<Page<Pet>>, ClientError> {
        let request = self.request(Method::GET, "/pets").query(query);
        self.execute(request).await
    }

    pub async fn get_pet(&self, id: i64) -> Result<Envelope<Pet>, ClientError> {
        let request = self.request(Method::GET, &format!("/pets/{id}"));
        self.execute(request).await
    }

    pub async fn create_pet(&self, pet: &PetCreate) -> Result<Envelope<Pet>, ClientError> {
        let request = self.request(Method::POST, "/pets").json(pet);
        self.execute(request).await
    }

    pub async fn update_pet(&self, id: i64, update: &PetUpdate) -> Result<Envelope<Pet>, ClientError> {
        let request = self.request(Method::PUT, &format!("/pets/{id}")).json(update);
        self.execute(request).await
    }

    pub async fn delete_pet(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/pets/{id}"));
        self.execute(request).await
    }
}
