//! Service tests for webserver
//!
//! This module contains tests for the order store implementations.
