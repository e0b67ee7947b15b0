//! Webserver library for the guided site builder
//!
//! This library exposes the conversation engine over a JSON HTTP API: chat
//! turns that replay the caller's session, template listings, quick-start
//! suggestions and order intake backed by a pluggable order store.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::OrderStore;

// Re-export service implementations
pub use services::{InMemoryOrderStore, JsonFileOrderStore};
