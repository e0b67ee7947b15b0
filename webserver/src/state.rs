//! Webserver state management
//!
//! Runtime counters and configuration shared by every handler. Sessions are
//! not kept here: the caller sends its session back on each turn.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use shared::WebServerConfig;

#[derive(Debug)]
pub struct WebServerState {
    pub config: WebServerConfig,
    pub server_start_time: Instant,
    chat_turns: AtomicU64,
    orders_created: AtomicU64,
}

impl WebServerState {
    pub fn new(config: WebServerConfig) -> Self {
        Self {
            config,
            server_start_time: Instant::now(),
            chat_turns: AtomicU64::new(0),
            orders_created: AtomicU64::new(0),
        }
    }

    pub fn record_chat_turn(&self) {
        self.chat_turns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_order(&self) {
        self.orders_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn chat_turns(&self) -> u64 {
        self.chat_turns.load(Ordering::Relaxed)
    }

    pub fn orders_created(&self) -> u64 {
        self.orders_created.load(Ordering::Relaxed)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
