//! Template resolution and placeholder rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use shared::{Category, TemplateDescriptor};

use super::catalog::{DESCRIPTION_PLACEHOLDER, NAME_PLACEHOLDER, TemplateCatalog};
use crate::error::{EngineError, EngineResult};

pub const DEFAULT_BUSINESS_NAME: &str = "My Site";
pub const DEFAULT_DESCRIPTION: &str = "Site description";

/// Looks up active templates by category
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    catalog: Arc<TemplateCatalog>,
}

impl TemplateResolver {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Resolve a category tag to its first active template
    ///
    /// The tag must match a category exactly; anything else is not found.
    pub fn resolve(&self, category: &str) -> EngineResult<&TemplateDescriptor> {
        let category: Category = category.parse().map_err(|_| EngineError::TemplateNotFound {
            category: category.to_string(),
        })?;
        self.resolve_category(category)
    }

    /// First active template of the category, in catalog declaration order
    pub fn resolve_category(&self, category: Category) -> EngineResult<&TemplateDescriptor> {
        self.catalog
            .by_category(category)
            .next()
            .ok_or_else(|| EngineError::TemplateNotFound {
                category: category.as_str().to_string(),
            })
    }
}

/// Stylesheet plus substituted markup, ready for a preview frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub template_id: String,
    pub html: String,
}

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.html
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Fill a descriptor's placeholders with session fields
///
/// Empty fields fall back to fixed defaults. Field values are HTML-escaped,
/// braces included, so user text can never reintroduce a placeholder.
pub fn render(descriptor: &TemplateDescriptor, business_name: &str, description: &str) -> RenderedDocument {
    let name = escape(or_default(business_name, DEFAULT_BUSINESS_NAME));
    let description = escape(or_default(description, DEFAULT_DESCRIPTION));

    let markup = descriptor
        .html
        .replace(NAME_PLACEHOLDER, &name)
        .replace(DESCRIPTION_PLACEHOLDER, &description);

    RenderedDocument {
        template_id: descriptor.id.clone(),
        html: format!("<style>\n{}\n</style>\n{}", descriptor.css.trim(), markup.trim()),
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            other => escaped.push(other),
        }
    }
    escaped
}
