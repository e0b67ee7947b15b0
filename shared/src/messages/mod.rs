//! Data definitions exchanged between the site builder components
//!
//! This module organizes the shared records by concern:
//! - `session`: caller-owned dialogue state and controller responses
//! - `template`: static template catalog records
//! - `order`: downstream purchase records
//! - `config`: component configuration

pub mod config;
pub mod order;
pub mod session;
pub mod template;

pub use config::{StoreKind, WebServerConfig};
pub use order::{Currency, Order, OrderStatus, Plan, WebsiteData};
pub use session::{BotResponse, SessionSnapshot, SessionState};
pub use template::{PriceTiers, TemplateDescriptor};
