//! Component configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::SharedError;

/// Backing store for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Json,
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Json => write!(f, "json"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StoreKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "file" => Ok(StoreKind::Json),
            "memory" | "mem" => Ok(StoreKind::Memory),
            _ => Err(SharedError::InvalidConfig {
                field: "store".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Web server configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WebServerConfig {
    pub bind_host: String,
    pub bind_port: u16,
    /// Directory holding `orders.json`
    pub data_dir: PathBuf,
    pub store: StoreKind,
    /// Optional JSON catalog replacing the built-in templates
    pub catalog_path: Option<PathBuf>,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 8080,
            data_dir: PathBuf::from("./data"),
            store: StoreKind::Json,
            catalog_path: None,
        }
    }
}

impl WebServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}
