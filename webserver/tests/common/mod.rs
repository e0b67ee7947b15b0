//! Common test utilities and infrastructure
//!
//! Shared fixtures and router helpers used across the webserver test suites.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::TestHelpers;
