//! Purchase records referencing a resolved template's pricing tier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::SharedError;
use crate::types::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    Advanced,
    Pro,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Basic => write!(f, "basic"),
            Plan::Advanced => write!(f, "advanced"),
            Plan::Pro => write!(f, "pro"),
        }
    }
}

impl FromStr for Plan {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Plan::Basic),
            "advanced" => Ok(Plan::Advanced),
            "pro" => Ok(Plan::Pro),
            _ => Err(SharedError::UnknownPlan { plan: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "SAR")]
    Sar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

/// Website content captured for an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WebsiteData {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 10, max = 1000))]
    pub description: String,
    pub sections: Vec<String>,
    pub colors: Vec<String>,
    #[serde(default)]
    pub customizations: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential identifier such as `ORDER001`
    pub id: String,
    pub customer_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    pub website_type: Category,
    pub plan: Plan,
    pub amount: f64,
    pub currency: Currency,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payment_id: Option<String>,
    pub website_data: WebsiteData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Format the sequential order identifier
    pub fn format_id(sequence: u64) -> String {
        format!("ORDER{sequence:03}")
    }
}
