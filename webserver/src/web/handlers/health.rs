//! Liveness endpoint

use axum::{Json, extract::State};

use engine::ChoiceSource;

use crate::traits::OrderStore;
use crate::types::HealthReply;
use crate::webserver_impl::WebServer;

/// GET /health
pub async fn health_check<O, C>(State(server): State<WebServer<O, C>>) -> Json<HealthReply>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let state = server.state();
    Json(HealthReply {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        templates: server.catalog().active().count(),
        chat_turns: state.chat_turns(),
        orders_created: state.orders_created(),
    })
}
