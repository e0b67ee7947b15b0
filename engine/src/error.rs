//! Engine-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid session state: unknown step '{step}'")]
    InvalidState { step: String },

    #[error("No active template for category: {category}")]
    TemplateNotFound { category: String },

    #[error("Malformed template catalog: {reason}")]
    MalformedCatalog { reason: String },

    #[error("Preview unavailable for business type: {business_type}")]
    PreviewUnavailable { business_type: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCatalog { reason: reason.into() }
    }

    /// Whether the caller should recover by showing a fallback
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. } | Self::PreviewUnavailable { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
