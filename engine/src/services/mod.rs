//! Service implementations
//!
//! Real implementations of the engine traits for production use

pub mod choice;

pub use choice::RngChoiceSource;
