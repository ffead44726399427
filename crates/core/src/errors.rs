use thiserror::Error;

use crate::schema::FieldErrors;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<FieldErrors> for EventError {
    fn from(errors: FieldErrors) -> Self {
        EventError::Validation(errors)
    }
}

pub type EventResult<T> = Result<T, EventError>;

/// A string that names none of an enumeration's variants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
