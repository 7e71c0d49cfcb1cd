//! Service catalogue client methods

use super::{ClientError, PetCareClient};
use crate::types::{Envelope, Page, Service, ServiceCreate, ServiceQuery, ServiceUpdate};
use reqwest::Method;

impl PetCareClient {
    pub async fn list_services(
        &self,
        query: &ServiceQuery,
    ) -> Result<Envelope<Page<Service>>, ClientError> {
        let request = self.request(Method::GET, "/services").query(query);
        self.execute(request).await
    }

    pub async fn get_service(&self, id: i64) -> Result<Envelope<Service>, ClientError> {
        let request = self.request(Method::GET, &format!("/services/{id}"));
        self.execute(request).await
    }

    pub async fn create_service(
        &self,
        service: &ServiceCreate,
    ) -> Result<Envelope<Service>, ClientError> {
        let request = self.request(Method::POST, "/services").json(service);
        self.execute(request).await
    }

    pub async fn update_service(
        &self,
        id: i64,
        update: &ServiceUpdate,
    ) -> Result<Envelope<Service>, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/services/{id}"))
            .json(update);
        self.execute(request).await
    }

    pub async fn delete_service(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/services/{id}"));
        self.execute(request).await
    }
}
