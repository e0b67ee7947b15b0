//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod json_order_store;
pub mod memory_order_store;

// Re-export service implementations
pub use json_order_store::JsonFileOrderStore;
pub use memory_order_store::InMemoryOrderStore;

#[cfg(test)]
mod tests;
