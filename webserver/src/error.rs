//! WebServer-specific error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use engine::EngineError;
use shared::{ComponentId, SharedError, component_error};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] validator::ValidationErrors),

    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    #[error("Order storage failed: {message}")]
    StorageError { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Engine error: {0}")]
    EngineError(#[from] EngineError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } | Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::EngineError(EngineError::InvalidState { .. }) => StatusCode::BAD_REQUEST,
            Self::TemplateNotFound { .. } | Self::OrderNotFound { .. } => StatusCode::NOT_FOUND,
            Self::EngineError(EngineError::TemplateNotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller
    ///
    /// Server-side failures get a generic message; the detail goes to the log.
    fn public_message(&self) -> String {
        match self {
            Self::InvalidRequest { details } => details.clone(),
            Self::ValidationFailed(_) => "بيانات غير صحيحة".to_string(),
            Self::TemplateNotFound { .. } | Self::EngineError(EngineError::TemplateNotFound { .. }) => {
                "القالب غير موجود".to_string()
            }
            Self::OrderNotFound { .. } => "الطلب غير موجود".to_string(),
            Self::EngineError(EngineError::InvalidState { .. }) => self.to_string(),
            _ => "حدث خطأ في معالجة الطلب".to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            component_error!(ComponentId::WebServer, error = %self, "Request failed");
        }

        let mut body = json!({
            "success": false,
            "error": self.public_message(),
        });
        if let Self::ValidationFailed(errors) = &self {
            body["details"] = serde_json::to_value(errors).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
