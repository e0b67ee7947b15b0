//! Chat turn handler
//!
//! Replays the caller's session through the dialogue controller and, when
//! the turn asks for a template, assembles the preview. A missing preview is
//! reported in the body, never as a failed request.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use engine::ChoiceSource;
use shared::{Action, ComponentId, SessionSnapshot, SessionState, component_debug, component_warn};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::OrderStore;
use crate::types::{ChatReply, ChatRequest};
use crate::webserver_impl::WebServer;

const MISSING_MESSAGE: &str = "البيانات المطلوبة مفقودة";

/// POST /api/chat
pub async fn chat_handler<O, C>(
    State(server): State<WebServer<O, C>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> WebServerResult<Json<ChatReply>>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;

    if request.quick_action.is_none() && request.message.trim().is_empty() {
        return Err(WebServerError::invalid_request(MISSING_MESSAGE));
    }

    let snapshot = request
        .chat_state
        .unwrap_or_else(|| SessionSnapshot::from(SessionState::new()));
    let controller = server.controller();

    let turn = {
        let mut choices = server.choice_source();
        match request.quick_action {
            Some(action) => {
                let state = controller.restore(snapshot)?;
                controller.quick_start(state, action, &mut choices)
            }
            None => controller.advance(snapshot, &request.message, &mut choices)?,
        }
    };
    server.state().record_chat_turn();

    component_debug!(
        ComponentId::WebServer,
        step = %turn.state.step,
        action = ?turn.response.action,
        "Chat turn completed"
    );

    let mut reply = ChatReply {
        success: true,
        response: turn.response,
        chat_state: turn.state,
        preview: None,
        preview_unavailable: false,
    };

    if reply.response.action == Action::ShowTemplate {
        match server.previewer().preview(reply.chat_state.clone()) {
            Ok((state, preview)) => {
                reply.chat_state = state;
                reply.preview = Some(preview);
            }
            Err(e) if e.is_recoverable() => {
                component_warn!(ComponentId::WebServer, error = %e, "Preview unavailable");
                reply.preview_unavailable = true;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Json(reply))
}
