//! Dialogue session records
//!
//! The session is owned by the caller and handed back unchanged on the next
//! turn. `SessionSnapshot` is its raw wire form; `SessionState` is the
//! checked form the dialogue controller consumes.

use serde::{Deserialize, Serialize};

use crate::errors::SharedError;
use crate::types::{Action, Category, Step};

/// Checked session state passed by value through each turn
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub step: Step,
    pub business_type: String,
    pub business_name: String,
    pub description: String,
    pub selected_template: Option<String>,
}

impl SessionState {
    /// Fresh session at the welcome step with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_step(step: Step) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }
}

/// Session as received from a caller, before the step is checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub step: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub selected_template: Option<String>,
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = SharedError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            step: snapshot.step.parse()?,
            business_type: snapshot.business_type,
            business_name: snapshot.business_name,
            description: snapshot.description,
            selected_template: snapshot.selected_template,
        })
    }
}

impl From<SessionState> for SessionSnapshot {
    fn from(state: SessionState) -> Self {
        Self {
            step: state.step.as_str().to_string(),
            business_type: state.business_type,
            business_name: state.business_name,
            description: state.description,
            selected_template: state.selected_template,
        }
    }
}

/// Scripted reply produced by the dialogue controller for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResponse {
    pub message: String,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub template_category: Option<Category>,
    /// Suggested UI "thinking" latency in milliseconds
    pub delay: u64,
}
