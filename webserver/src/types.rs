//! Request and response bodies for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use engine::{Preview, QuickAction};
use shared::{
    BotResponse, Category, Currency, Order, OrderStatus, Plan, SessionSnapshot, SessionState, TemplateDescriptor,
    WebsiteData,
};

/// One user turn, carrying the caller-held session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Quick-start suggestion chosen instead of typing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_action: Option<QuickAction>,
    /// Missing state starts a fresh session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_state: Option<SessionSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub success: bool,
    pub response: BotResponse,
    pub chat_state: SessionState,
    pub preview: Option<Preview>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub preview_unavailable: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesReply {
    pub success: bool,
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateReply {
    pub success: bool,
    pub template: TemplateDescriptor,
}

/// Order submission, validated before it reaches the store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(length(min = 2, max = 100))]
    pub customer_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub website_type: Category,
    pub plan: Plan,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub currency: Currency,
    #[validate(nested)]
    pub website_data: WebsiteData,
}

impl OrderRequest {
    /// Build a pending order under the given id
    pub fn into_order(self, id: String, now: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            website_type: self.website_type,
            plan: self.plan,
            amount: self.amount,
            currency: self.currency,
            status: OrderStatus::Pending,
            payment_id: None,
            website_data: self.website_data,
            created_at: now,
            updated_at: now,
            delivered_at: None,
        }
    }
}

/// Partial order update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersReply {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReply {
    pub success: bool,
    pub order: Order,
    pub message: String,
}

/// Contents of the JSON order file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLedger {
    pub orders: Vec<Order>,
    pub next_id: u64,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderLedger {
    /// Append a new order and advance the sequence
    pub fn append(&mut self, request: OrderRequest, now: DateTime<Utc>) -> Order {
        let order = request.into_order(Order::format_id(self.next_id), now);
        self.orders.push(order.clone());
        self.next_id += 1;
        order
    }

    /// Merge a partial update into the order with `id`
    pub fn apply_update(&mut self, id: &str, update: OrderUpdate, now: DateTime<Utc>) -> Option<Order> {
        let order = self.orders.iter_mut().find(|order| order.id == id)?;
        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(payment_id) = update.payment_id {
            order.payment_id = Some(payment_id);
        }
        if let Some(delivered_at) = update.delivered_at {
            order.delivered_at = Some(delivered_at);
        }
        order.updated_at = now;
        Some(order.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickActionEntry {
    pub id: QuickAction,
    pub label: String,
    pub category: Category,
}

impl From<QuickAction> for QuickActionEntry {
    fn from(action: QuickAction) -> Self {
        Self {
            id: action,
            label: action.label().to_string(),
            category: action.category(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionsReply {
    pub success: bool,
    pub quick_actions: Vec<QuickActionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReply {
    pub status: String,
    pub uptime_seconds: u64,
    pub templates: usize,
    pub chat_turns: u64,
    pub orders_created: u64,
}
