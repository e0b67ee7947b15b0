//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Component identifier used to tag log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Dialogue controller and template resolver
    Engine,
    /// HTTP caller layer
    WebServer,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Engine => write!(f, "engine"),
            ComponentId::WebServer => write!(f, "webserver"),
        }
    }
}

/// Business category a website template is built for
///
/// Declaration order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Shop,
    Clinic,
    Portfolio,
    Business,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 5] = [
        Category::Restaurant,
        Category::Shop,
        Category::Clinic,
        Category::Portfolio,
        Category::Business,
    ];

    /// Stable machine tag, as used on the wire and in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Shop => "shop",
            Category::Clinic => "clinic",
            Category::Portfolio => "portfolio",
            Category::Business => "business",
        }
    }

    /// Display label stored in the session as `businessType`
    pub fn label(&self) -> &'static str {
        match self {
            Category::Restaurant => "مطعم",
            Category::Shop => "متجر",
            Category::Clinic => "عيادة",
            Category::Portfolio => "معرض أعمال",
            Category::Business => "شركة",
        }
    }

    /// Map a stored display label back to its category
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SharedError;

    /// Exact match against the machine tags; no case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| SharedError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

/// Position in the fixed dialogue sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Welcome,
    BusinessType,
    BusinessName,
    Description,
    Customization,
    Finalize,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::BusinessType => "business_type",
            Step::BusinessName => "business_name",
            Step::Description => "description",
            Step::Customization => "customization",
            Step::Finalize => "finalize",
        }
    }

    /// Welcome and business_type form one logical classification state
    pub fn is_classification(&self) -> bool {
        matches!(self, Step::Welcome | Step::BusinessType)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Finalize)
    }

    /// The single step that follows this one on an accepted turn
    pub fn successor(&self) -> Step {
        match self {
            Step::Welcome | Step::BusinessType => Step::BusinessName,
            Step::BusinessName => Step::Description,
            Step::Description => Step::Customization,
            Step::Customization | Step::Finalize => Step::Finalize,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Step::Welcome),
            "business_type" => Ok(Step::BusinessType),
            "business_name" => Ok(Step::BusinessName),
            "description" => Ok(Step::Description),
            "customization" => Ok(Step::Customization),
            "finalize" => Ok(Step::Finalize),
            _ => Err(SharedError::UnknownStep { step: s.to_string() }),
        }
    }
}

/// Side effect the caller should trigger after showing a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    None,
    RequestInfo,
    ShowTemplate,
    Customize,
    Finalize,
}
