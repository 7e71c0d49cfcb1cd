//! Order client methods

use super::{ClientError, PetCareClient};
use crate::types::{Envelope, Order, OrderCreate, OrderQuery, OrderUpdate, Page};
use reqwest::Method;

impl PetCareClient {
    pub async fn list_orders(&self, query: &OrderQuery) -> Result<Envelope<Page<Order>>, ClientError> {
        let request = self.request(Method::GET, "/orders").query(query);
        self.execute(request).await
    }

    pub async fn get_order(&self, id: i64) -> Result<Envelope<Order>, ClientError> {
        let request = self.request(Method::GET, &format!("/orders/{id}"));
        self.execute(request).await
    }

    /// Place an order; the server assigns the order number and total
    pub async fn create_order(&self, order: &OrderCreate) -> Result<Envelope<Order>, ClientError> {
        let request = self.request(Method::POST, "/orders").json(order);
        self.execute(request).await
    }

    pub async fn update_order(
        &self,
        id: i64,
        update: &OrderUpdate,
    ) -> Result<Envelope<Order>, ClientError> {
        let request = self.request(Method::PUT, &format!("/orders/{id}")).json(update);
        self.execute(request).await
    }

    pub async fn delete_order(&self, id: i64) -> Result<Envelope<bool>, ClientError> {
        let request = self.request(Method::DELETE, &format!("/orders/{id}"));
        self.execute(request).await
    }
}
