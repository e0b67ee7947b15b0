//! JSON file order store
//!
//! Persists every order in a single `orders.json` holding the order list and
//! the next sequence number. The file is created on first write; a missing
//! file reads as an empty ledger. Writes go through a temporary file and a
//! rename so a crash never leaves a truncated ledger behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;

use shared::{ComponentId, Order, component_debug, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::OrderStore;
use crate::types::{OrderLedger, OrderRequest, OrderUpdate};

pub const ORDERS_FILE: &str = "orders.json";

#[derive(Clone)]
pub struct JsonFileOrderStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Arc<Mutex<()>>,
}

impl JsonFileOrderStore {
    /// Store backed by `orders.json` inside `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::at_path(data_dir.as_ref().join(ORDERS_FILE))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_ledger(&self) -> WebServerResult<OrderLedger> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| WebServerError::storage(format!("{} is not a valid ledger: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                component_debug!(ComponentId::WebServer, path = %self.path.display(), "No order file yet");
                Ok(OrderLedger::default())
            }
            Err(e) => Err(WebServerError::storage(format!("reading {}: {e}", self.path.display()))),
        }
    }

    async fn write_ledger(&self, ledger: &OrderLedger) -> WebServerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for JsonFileOrderStore {
    async fn list(&self) -> WebServerResult<Vec<Order>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_ledger().await?.orders)
    }

    async fn create(&self, request: OrderRequest) -> WebServerResult<Order> {
        let _guard = self.lock.lock().await;
        let mut ledger = self.read_ledger().await?;
        let order = ledger.append(request, Utc::now());
        self.write_ledger(&ledger).await?;

        component_info!(ComponentId::WebServer, order_id = %order.id, "Order created");
        Ok(order)
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> WebServerResult<Order> {
        let _guard = self.lock.lock().await;
        let mut ledger = self.read_ledger().await?;
        let order = ledger
            .apply_update(id, update, Utc::now())
            .ok_or_else(|| WebServerError::OrderNotFound { id: id.to_string() })?;
        self.write_ledger(&ledger).await?;
        Ok(order)
    }
}
