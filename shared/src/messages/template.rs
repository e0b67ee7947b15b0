//! Template catalog records

use serde::{Deserialize, Serialize};

use super::order::Plan;
use crate::types::Category;

/// Price of a template per plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTiers {
    pub basic: u32,
    pub advanced: u32,
    pub pro: u32,
}

impl PriceTiers {
    pub fn for_plan(&self, plan: Plan) -> u32 {
        match plan {
            Plan::Basic => self.basic,
            Plan::Advanced => self.advanced,
            Plan::Pro => self.pro,
        }
    }
}

/// Static description of one website template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub preview: String,
    pub thumbnail: String,
    /// Page sections in display order
    pub sections: Vec<String>,
    pub features: Vec<String>,
    pub price: PriceTiers,
    /// Palette in display order
    pub colors: Vec<String>,
    /// Markup with `{{businessName}}` / `{{businessDescription}}` placeholders
    pub html: String,
    pub css: String,
    pub is_active: bool,
}

impl TemplateDescriptor {
    pub fn price_for(&self, plan: Plan) -> u32 {
        self.price.for_plan(plan)
    }
}
