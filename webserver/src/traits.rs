//! Service trait definitions for dependency injection
//!
//! Order persistence is abstracted behind this trait so handlers can be
//! tested against mocks and the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use shared::Order;
use crate::error::WebServerResult;
use crate::types::{OrderRequest, OrderUpdate};

/// Order persistence service trait
#[mockall::automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders in creation order
    async fn list(&self) -> WebServerResult<Vec<Order>>;

    /// Store a validated request as a new pending order
    async fn create(&self, request: OrderRequest) -> WebServerResult<Order>;

    /// Merge a partial update, failing with `OrderNotFound` for unknown ids
    async fn update(&self, id: &str, update: OrderUpdate) -> WebServerResult<Order>;
}

#[async_trait]
impl<T> OrderStore for Arc<T>
where
    T: OrderStore + ?Sized,
{
    async fn list(&self) -> WebServerResult<Vec<Order>> {
        (**self).list().await
    }

    async fn create(&self, request: OrderRequest) -> WebServerResult<Order> {
        (**self).create(request).await
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> WebServerResult<Order> {
        (**self).update(id, update).await
    }
}
