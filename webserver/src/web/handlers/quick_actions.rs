//! Quick-start suggestions

use axum::Json;

use engine::QuickAction;

use crate::types::{QuickActionEntry, QuickActionsReply};

/// GET /api/quick-actions
pub async fn quick_actions_handler() -> Json<QuickActionsReply> {
    Json(QuickActionsReply {
        success: true,
        quick_actions: QuickAction::ALL.into_iter().map(QuickActionEntry::from).collect(),
    })
}
