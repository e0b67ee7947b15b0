//! Preview assembly for the `show_template` action
//!
//! Resolution follows one fallback policy: a session whose business type has
//! no active template (or is not a known label at all) gets the default
//! category's template instead. Only when the default category is also
//! missing does the caller see `PreviewUnavailable`.

use serde::{Deserialize, Serialize};

use shared::{Category, ComponentId, SessionState, TemplateDescriptor, component_debug, component_warn};

use super::resolver::{DEFAULT_BUSINESS_NAME, DEFAULT_DESCRIPTION, RenderedDocument, TemplateResolver, render};
use crate::error::{EngineError, EngineResult};

/// Everything a caller needs to show a site preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub title: String,
    pub description: String,
    pub template_id: String,
    pub template_name: String,
    pub category: Category,
    pub colors: Vec<String>,
    pub sections: Vec<String>,
    pub document: RenderedDocument,
    /// Set when the default category stood in for the session's own
    pub fell_back: bool,
}

#[derive(Debug, Clone)]
pub struct Previewer {
    resolver: TemplateResolver,
    default_category: Category,
}

impl Previewer {
    pub const DEFAULT_CATEGORY: Category = Category::Restaurant;

    pub fn new(resolver: TemplateResolver) -> Self {
        Self {
            resolver,
            default_category: Self::DEFAULT_CATEGORY,
        }
    }

    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }

    /// Resolve and render the session's template
    ///
    /// Returns the session with `selected_template` set alongside the preview.
    pub fn preview(&self, state: SessionState) -> EngineResult<(SessionState, Preview)> {
        let (template, fell_back) = self.template_for(&state.business_type)?;

        let document = render(template, &state.business_name, &state.description);
        let preview = Preview {
            title: non_empty_or(&state.business_name, DEFAULT_BUSINESS_NAME),
            description: non_empty_or(&state.description, DEFAULT_DESCRIPTION),
            template_id: template.id.clone(),
            template_name: template.name.clone(),
            category: template.category,
            colors: template.colors.clone(),
            sections: template.sections.clone(),
            document,
            fell_back,
        };

        component_debug!(ComponentId::Engine, template = %template.id, fell_back, "Preview rendered");

        let state = SessionState {
            selected_template: Some(template.id.clone()),
            ..state
        };
        Ok((state, preview))
    }

    fn template_for(&self, business_type: &str) -> EngineResult<(&TemplateDescriptor, bool)> {
        if let Some(category) = Category::from_label(business_type) {
            match self.resolver.resolve_category(category) {
                Ok(template) => return Ok((template, false)),
                Err(EngineError::TemplateNotFound { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        component_warn!(
            ComponentId::Engine,
            business_type = %business_type,
            fallback = %self.default_category,
            "No active template for business type, using default category"
        );

        self.resolver
            .resolve_category(self.default_category)
            .map(|template| (template, true))
            .map_err(|_| EngineError::PreviewUnavailable {
                business_type: business_type.to_string(),
            })
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
