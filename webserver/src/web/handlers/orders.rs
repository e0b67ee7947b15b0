//! Order endpoints

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use engine::ChoiceSource;
use shared::{ComponentId, component_info};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::OrderStore;
use crate::types::{OrderReply, OrderRequest, OrderUpdate, OrdersReply};
use crate::webserver_impl::WebServer;

const ORDER_CREATED: &str = "تم إنشاء الطلب بنجاح";
const ORDER_UPDATED: &str = "تم تحديث الطلب";

/// GET /api/orders
pub async fn list_orders_handler<O, C>(State(server): State<WebServer<O, C>>) -> WebServerResult<Json<OrdersReply>>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let orders = server.orders().list().await?;
    Ok(Json(OrdersReply { success: true, orders }))
}

/// POST /api/orders
pub async fn create_order_handler<O, C>(
    State(server): State<WebServer<O, C>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> WebServerResult<Json<OrderReply>>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;
    request.validate()?;

    let order = server.orders().create(request).await?;
    server.state().record_order();
    component_info!(
        ComponentId::WebServer,
        order_id = %order.id,
        plan = %order.plan,
        website_type = %order.website_type,
        "📦 Order received"
    );

    Ok(Json(OrderReply {
        success: true,
        order,
        message: ORDER_CREATED.to_string(),
    }))
}

/// PATCH /api/orders/:id
///
/// Partial update of status, payment id and delivery time.
pub async fn update_order_handler<O, C>(
    State(server): State<WebServer<O, C>>,
    Path(id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> WebServerResult<Json<OrderReply>>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    let Json(update) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;
    let order = server.orders().update(&id, update).await?;

    Ok(Json(OrderReply {
        success: true,
        order,
        message: ORDER_UPDATED.to_string(),
    }))
}
