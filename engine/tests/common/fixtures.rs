//! Test fixtures and data for engine tests

use shared::{Category, PriceTiers, TemplateDescriptor};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SEED: u64 = 42;

    pub const RESTAURANT_NAME: &'static str = "مطعم الذوق";
    pub const RESTAURANT_DESCRIPTION: &'static str = "أشهى الأطباق الشرقية";

    /// One free-text opener per category, in priority order
    pub fn openers() -> Vec<(&'static str, Category)> {
        vec![
            ("أريد موقع مطعم", Category::Restaurant),
            ("I want an online shop", Category::Shop),
            ("عيادة أسنان", Category::Clinic),
            ("my design portfolio", Category::Portfolio),
            ("موقع لشركة ناشئة", Category::Business),
        ]
    }

    /// Texts that match no category keyword
    pub fn unmatched_texts() -> Vec<&'static str> {
        vec!["", "   ", "hello", "مرحبا", "blog about cars"]
    }

    pub fn descriptor(id: &str, category: Category) -> TemplateDescriptor {
        TemplateDescriptor {
            id: id.to_string(),
            name: format!("{id} template"),
            category,
            description: "fixture".to_string(),
            preview: String::new(),
            thumbnail: String::new(),
            sections: vec!["home".to_string()],
            features: vec![],
            price: PriceTiers { basic: 10, advanced: 20, pro: 30 },
            colors: vec!["#000000".to_string()],
            html: "<h1>{{businessName}}</h1><p>{{businessDescription}}</p>".to_string(),
            css: "h1 { margin: 0; }".to_string(),
            is_active: true,
        }
    }

    /// JSON catalog with a single shop template and an inactive clinic
    pub fn catalog_json() -> String {
        let mut clinic = Self::descriptor("clinic-off", Category::Clinic);
        clinic.is_active = false;
        let templates = vec![Self::descriptor("shop-json", Category::Shop), clinic];
        serde_json::to_string_pretty(&templates).unwrap()
    }
}
