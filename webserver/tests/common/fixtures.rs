//! Test fixtures and data for webserver tests

use serde_json::{Value, json};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SEED: u64 = 7;

    pub fn chat(message: &str, chat_state: Value) -> Value {
        json!({ "message": message, "chatState": chat_state })
    }

    pub fn welcome_state() -> Value {
        json!({
            "step": "welcome",
            "businessType": "",
            "businessName": "",
            "description": ""
        })
    }

    pub fn description_state(business_type: &str) -> Value {
        json!({
            "step": "description",
            "businessType": business_type,
            "businessName": "مطعم الذوق",
            "description": ""
        })
    }

    pub fn order() -> Value {
        json!({
            "customerName": "سارة أحمد",
            "email": "sara@example.com",
            "phone": "+966500000000",
            "websiteType": "restaurant",
            "plan": "pro",
            "amount": 200,
            "currency": "SAR",
            "websiteData": {
                "title": "مطعم الذوق",
                "description": "أشهى الأطباق الشرقية والغربية",
                "sections": ["الرئيسية", "قائمة الطعام"],
                "colors": ["#D97706", "#FCD34D"],
                "customizations": { "font": "Cairo" }
            }
        })
    }
}
