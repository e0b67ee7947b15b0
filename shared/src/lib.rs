//! Shared types for the site builder
//!
//! Contains the data definitions every component agrees on: the session
//! snapshot replayed each turn, dialogue responses, template descriptors
//! and orders. Transport-specific request types stay in their components.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Dialogue session
    BotResponse, SessionSnapshot, SessionState,

    // Template catalog
    PriceTiers, TemplateDescriptor,

    // Downstream orders
    Currency, Order, OrderStatus, Plan, WebsiteData,

    // Configuration
    StoreKind, WebServerConfig,
};
