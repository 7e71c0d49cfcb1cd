//! Dashboard client methods

use super::{ClientError, PetCareClient};
use crate::types::{DashboardStats, Envelope};
use reqwest::Method;

impl PetCareClient {
    /// Headline counters for the dashboard page
    pub async fn dashboard_stats(&self) -> Result<Envelope<DashboardStats>, ClientError> {
        let request = self.request(Method::GET, "/dashboard/stats");
        self.execute(request).await
    }
}
