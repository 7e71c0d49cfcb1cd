//! Health record client methods

use super::{ClientError, PetCareClient};
use crate::types::{
    Envelope, HealthRecord, HealthRecordCreate, HealthRecordQuery, HealthRecordUpdate, Page,
};
use reqwest::Method;

impl PetCareClient {
    pub async fn list_health_records(
        &self,
        query: &HealthRecordQuery,
    ) -> Result<Envelope<Page<HealthRecord>>, ClientError> {
        let request = self.request(Method::GET, "/health-records").query(query);
        self.execute(request).await
    }

    pub async fn get_health_record(&self, id: i64) -> Result<Envelope<HealthRecord>, ClientError> {
        let request = self.request(Method::GET, &format!("/health-records/{id}"));
        self.execute(request).await
    }

    pub async fn create_health_record(
        &self,
        record: &HealthRecordCreate,
    ) -> Result<Envelope<HealthRecord>, ClientError> {
        let request = self.request(Method::POST, "/health-records").json(record);
        self.execute(request).await
    }

    pub async fn update_health_record(
        &self,
        id: i64,
        update: &HealthRecordUpdate,
    ) -> Result<Envelope<HealthRecord>, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/health-records/{id}"))
            .json(update);
        self.execute(request).await
    }

    pub async fn delete_health_record(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/health-records/{id}"));
        self.execute(request).await
    }
}
