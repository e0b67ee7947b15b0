//! Static template catalog
//!
//! The catalog is loaded once and is read-only afterwards. Loading validates
//! the descriptors so a malformed catalog fails at startup instead of
//! producing broken previews later.

use std::collections::HashSet;
use std::path::Path;

use shared::{Category, ComponentId, PriceTiers, TemplateDescriptor, component_debug};

use crate::error::{EngineError, EngineResult};

/// Placeholder tokens the renderer knows how to fill
pub const NAME_PLACEHOLDER: &str = "{{businessName}}";
pub const DESCRIPTION_PLACEHOLDER: &str = "{{businessDescription}}";

/// Validated, declaration-ordered list of template descriptors
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Build a catalog, rejecting duplicate ids and unknown placeholders
    pub fn new(templates: Vec<TemplateDescriptor>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            validate_descriptor(template)?;
            if !seen.insert(template.id.as_str()) {
                return Err(EngineError::malformed(format!("duplicate template id '{}'", template.id)));
            }
        }

        component_debug!(ComponentId::Engine, templates = templates.len(), "Template catalog loaded");
        Ok(Self { templates })
    }

    /// Built-in catalog with one active template per category
    pub fn builtin() -> EngineResult<Self> {
        Self::new(builtin_templates())
    }

    /// Parse a JSON array of descriptors
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let templates: Vec<TemplateDescriptor> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    pub fn from_json_file(path: &Path) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn by_id(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Active templates of a category, in declaration order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates
            .iter()
            .filter(move |template| template.is_active && template.category == category)
    }

    pub fn active(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.iter().filter(|template| template.is_active)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn validate_descriptor(template: &TemplateDescriptor) -> EngineResult<()> {
    if template.id.trim().is_empty() {
        return Err(EngineError::malformed("template id must not be empty"));
    }

    let price = template.price;
    if price.basic == 0 || price.advanced == 0 || price.pro == 0 {
        return Err(EngineError::malformed(format!(
            "template '{}' has a zero price tier",
            template.id
        )));
    }

    if template.css.contains("{{") {
        return Err(EngineError::malformed(format!(
            "template '{}' has a placeholder in its stylesheet",
            template.id
        )));
    }

    // Every `{{` in the markup must open a known placeholder
    let mut rest = template.html.as_str();
    while let Some(start) = rest.find("{{") {
        let candidate = &rest[start..];
        let token = [NAME_PLACEHOLDER, DESCRIPTION_PLACEHOLDER]
            .into_iter()
            .find(|token| candidate.starts_with(token))
            .ok_or_else(|| {
                let end = candidate.find("}}").map(|i| i + 2).unwrap_or(candidate.len());
                EngineError::malformed(format!(
                    "template '{}' has unknown placeholder '{}'",
                    template.id,
                    &candidate[..end]
                ))
            })?;
        rest = &candidate[token.len()..];
    }

    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn builtin_templates() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            id: "restaurant-001".to_string(),
            name: "مطعم العائلة".to_string(),
            category: Category::Restaurant,
            description: "قالب مطعم احترافي مع قائمة طعام تفاعلية ونظام حجز طاولات".to_string(),
            preview: "/templates/restaurant-preview.jpg".to_string(),
            thumbnail: "/templates/restaurant-thumb.jpg".to_string(),
            sections: strings(&["الرئيسية", "قائمة الطعام", "من نحن", "المعرض", "اتصل بنا", "حجز طاولة"]),
            features: strings(&[
                "قائمة طعام تفاعلية",
                "نظام حجز طاولات",
                "معرض الصور",
                "معلومات الطاهي",
                "تقييمات العملاء",
            ]),
            price: PriceTiers { basic: 50, advanced: 100, pro: 200 },
            colors: strings(&["#D97706", "#FCD34D", "#F59E0B", "#FBBF24"]),
            html: include_str!("../../templates/restaurant-001.html").to_string(),
            css: include_str!("../../templates/restaurant-001.css").to_string(),
            is_active: true,
        },
        TemplateDescriptor {
            id: "shop-001".to_string(),
            name: "متجر الأناقة".to_string(),
            category: Category::Shop,
            description: "متجر إلكتروني عصري لعرض وبيع المنتجات مع سلة تسوق".to_string(),
            preview: "/templates/shop-preview.jpg".to_string(),
            thumbnail: "/templates/shop-thumb.jpg".to_string(),
            sections: strings(&["الرئيسية", "المنتجات", "العروض", "من نحن", "اتصل بنا", "سلة التسوق"]),
            features: strings(&["عرض المنتجات", "سلة التسوق", "نظام البحث", "تصنيف المنتجات", "صفحة الدفع"]),
            price: PriceTiers { basic: 75, advanced: 150, pro: 300 },
            colors: strings(&["#7C3AED", "#A78BFA", "#8B5CF6", "#DDD6FE"]),
            html: include_str!("../../templates/shop-001.html").to_string(),
            css: include_str!("../../templates/shop-001.css").to_string(),
            is_active: true,
        },
        TemplateDescriptor {
            id: "clinic-001".to_string(),
            name: "عيادة الصحة".to_string(),
            category: Category::Clinic,
            description: "موقع عيادة طبية احترافي مع نظام حجز المواعيد".to_string(),
            preview: "/templates/clinic-preview.jpg".to_string(),
            thumbnail: "/templates/clinic-thumb.jpg".to_string(),
            sections: strings(&["الرئيسية", "الخدمات", "الأطباء", "حجز موعد", "من نحن", "اتصل بنا"]),
            features: strings(&[
                "نظام حجز المواعيد",
                "معلومات الأطباء",
                "الخدمات الطبية",
                "معلومات التأمين",
                "نصائح صحية",
            ]),
            price: PriceTiers { basic: 100, advanced: 200, pro: 400 },
            colors: strings(&["#059669", "#10B981", "#34D399", "#A7F3D0"]),
            html: include_str!("../../templates/clinic-001.html").to_string(),
            css: include_str!("../../templates/clinic-001.css").to_string(),
            is_active: true,
        },
        TemplateDescriptor {
            id: "portfolio-001".to_string(),
            name: "معرض الأعمال".to_string(),
            category: Category::Portfolio,
            description: "موقع شخصي لعرض الأعمال والمهارات بتصميم عصري".to_string(),
            preview: "/templates/portfolio-preview.jpg".to_string(),
            thumbnail: "/templates/portfolio-thumb.jpg".to_string(),
            sections: strings(&["الرئيسية", "من أنا", "أعمالي", "مهاراتي", "تواصل معي"]),
            features: strings(&["معرض الأعمال", "السيرة الذاتية", "المهارات", "شهادات العملاء", "نموذج التواصل"]),
            price: PriceTiers { basic: 40, advanced: 80, pro: 160 },
            colors: strings(&["#EF4444", "#F87171", "#FCA5A5", "#FEE2E2"]),
            html: include_str!("../../templates/portfolio-001.html").to_string(),
            css: include_str!("../../templates/portfolio-001.css").to_string(),
            is_active: true,
        },
        TemplateDescriptor {
            id: "business-001".to_string(),
            name: "شركة الريادة".to_string(),
            category: Category::Business,
            description: "موقع شركة مهني يعرض الخدمات وفريق العمل ووسائل التواصل".to_string(),
            preview: "/templates/business-preview.jpg".to_string(),
            thumbnail: "/templates/business-thumb.jpg".to_string(),
            sections: strings(&["الرئيسية", "خدماتنا", "فريق العمل", "من نحن", "اتصل بنا"]),
            features: strings(&["عرض الخدمات", "فريق العمل", "طلب عرض سعر", "شهادات العملاء", "نموذج التواصل"]),
            price: PriceTiers { basic: 80, advanced: 160, pro: 320 },
            colors: strings(&["#1E3A8A", "#3B82F6", "#93C5FD", "#DBEAFE"]),
            html: include_str!("../../templates/business-001.html").to_string(),
            css: include_str!("../../templates/business-001.css").to_string(),
            is_active: true,
        },
    ]
}
