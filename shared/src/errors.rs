//! Shared error types for the site builder

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown dialogue step: {step}")]
    UnknownStep { step: String },

    #[error("Unknown business category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown plan: {plan}")]
    UnknownPlan { plan: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
