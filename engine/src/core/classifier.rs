//! Keyword classification of free text into a business category
//!
//! Matching is case-insensitive substring search over a fixed keyword table.
//! Categories are scanned in priority order and the first one with any
//! keyword present wins, so overlapping keywords (`أعمال` appears under both
//! portfolio and business) resolve by declared priority alone.

use shared::Category;

/// Keywords for one category, lowercase
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Keyword table in priority order
pub const KEYWORD_RULES: [KeywordRule; 5] = [
    KeywordRule {
        category: Category::Restaurant,
        keywords: &["مطعم", "restaurant", "طعام"],
    },
    KeywordRule {
        category: Category::Shop,
        keywords: &["متجر", "shop", "تسوق", "بيع"],
    },
    KeywordRule {
        category: Category::Clinic,
        keywords: &["عيادة", "طبي", "دكتور", "clinic"],
    },
    KeywordRule {
        category: Category::Portfolio,
        keywords: &["معرض", "أعمال", "portfolio", "تصميم"],
    },
    KeywordRule {
        category: Category::Business,
        keywords: &["شركة", "أعمال", "company", "مؤسسة"],
    },
];

/// Classify user text, returning `None` when no keyword occurs
pub fn classify(text: &str) -> Option<Category> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|rule| rule.category)
}
