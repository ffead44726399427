use serde::{Deserialize, Serialize};

use crate::schema::FieldErrors;

use super::event::{EventDescription, EventDraft};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub draft: EventDraft,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeResponse {
    pub draft: EventDraft,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventDescription>,
}

impl From<Result<EventDescription, FieldErrors>> for ValidateResponse {
    fn from(result: Result<EventDescription, FieldErrors>) -> Self {
        match result {
            Ok(event) => Self {
                valid: true,
                errors: FieldErrors::default(),
                event: Some(event),
            },
            Err(errors) => Self {
                valid: false,
                errors,
                event: None,
            },
        }
    }
}
