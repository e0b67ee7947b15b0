//! Template catalog queries

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use engine::ChoiceSource;
use shared::{Category, TemplateDescriptor};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::OrderStore;
use crate::types::{TemplateQuery, TemplateReply, TemplatesReply};
use crate::webserver_impl::WebServer;

/// Lists every active template
const ALL_CATEGORIES: &str = "all";

/// GET /api/templates[?category=..|?id=..]
///
/// An id takes precedence over a category. Unknown categories list nothing.
pub async fn templates_handler<O, C>(
    State(server): State<WebServer<O, C>>,
    Query(query): Query<TemplateQuery>,
) -> WebServerResult<Response>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let catalog = server.catalog();

    if let Some(id) = query.id.filter(|id| !id.is_empty()) {
        let template = catalog
            .by_id(&id)
            .cloned()
            .ok_or(WebServerError::TemplateNotFound { id })?;
        return Ok(Json(TemplateReply { success: true, template }).into_response());
    }

    let templates: Vec<TemplateDescriptor> = match query.category.as_deref() {
        None | Some("") | Some(ALL_CATEGORIES) => catalog.active().cloned().collect(),
        Some(tag) => match tag.parse::<Category>() {
            Ok(category) => catalog.by_category(category).cloned().collect(),
            Err(_) => Vec::new(),
        },
    };

    Ok(Json(TemplatesReply { success: true, templates }).into_response())
}
