//! HTTP surface of the site builder

pub mod handlers;
