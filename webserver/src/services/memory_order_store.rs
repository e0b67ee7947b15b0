//! In-memory order store
//!
//! Orders live only as long as the process. Used with `--store memory` and
//! in tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use shared::{ComponentId, Order, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::OrderStore;
use crate::types::{OrderLedger, OrderRequest, OrderUpdate};

#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    ledger: Arc<RwLock<OrderLedger>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list(&self) -> WebServerResult<Vec<Order>> {
        Ok(self.ledger.read().await.orders.clone())
    }

    async fn create(&self, request: OrderRequest) -> WebServerResult<Order> {
        let order = self.ledger.write().await.append(request, Utc::now());
        component_info!(ComponentId::WebServer, order_id = %order.id, "Order created");
        Ok(order)
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> WebServerResult<Order> {
        self.ledger
            .write()
            .await
            .apply_update(id, update, Utc::now())
            .ok_or_else(|| WebServerError::OrderNotFound { id: id.to_string() })
    }
}
