//! # Event Handlers
//!
//! JSON boundary around the event form. None of these handlers store
//! anything; a submitted event is returned to the caller, which forwards it
//! to the create/update API.

use axum::{Json, extract::rejection::JsonRejection};
use evently_core::{
    form::EventForm,
    models::{
        event::{EventDescription, EventDraft},
        requests::{NormalizeRequest, NormalizeResponse, ValidateResponse},
    },
    schema,
};
use tracing::debug;

use crate::middleware::error_handling::{AppError, reject_body};

/// Live validation. Always 200; the verdict is in the body.
#[axum::debug_handler]
pub async fn validate_event(
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(draft) = payload.map_err(reject_body)?;
    let response = ValidateResponse::from(schema::validate(&draft));
    debug!(valid = response.valid, "validated event draft");
    Ok(Json(response))
}

/// Frequency change: reshape the draft, then report what still fails.
#[axum::debug_handler]
pub async fn normalize_event(
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let Json(request) = payload.map_err(reject_body)?;
    let mut form = EventForm::from_draft(request.draft);
    let errors = form.change_frequency(&request.frequency);

    Ok(Json(NormalizeResponse {
        draft: form.into_draft(),
        errors,
    }))
}

/// Final validation. 422 with per-field messages unless the draft is clean.
#[axum::debug_handler]
pub async fn submit_event(
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> Result<Json<EventDescription>, AppError> {
    let Json(draft) = payload.map_err(reject_body)?;
    let event = EventForm::from_draft(draft).submit()?;
    Ok(Json(event))
}
