//! Request handlers, one module per API area

pub mod chat;
pub mod health;
pub mod orders;
pub mod quick_actions;
pub mod templates;
