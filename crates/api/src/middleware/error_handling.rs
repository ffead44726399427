//! # Error Handling Middleware
//!
//! Maps core `EventError`s to HTTP status codes and JSON bodies so every
//! endpoint fails the same way. Validation failures carry their per-field
//! messages under `fields`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use evently_core::errors::EventError;
use serde_json::json;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use evently_api::middleware::error_handling::AppError;
/// use evently_core::{models::event::{EventDescription, EventDraft}, schema};
///
/// async fn handler(Json(draft): Json<EventDraft>) -> Result<Json<EventDescription>, AppError> {
///     let event = schema::validate(&draft)?;
///     Ok(Json(event))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub EventError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EventError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EventError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            EventError::Serialization(_) => StatusCode::BAD_REQUEST,
            EventError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, "request rejected");
        }

        let message = self.0.to_string();
        let body = match self.0 {
            EventError::Validation(fields) => json!({ "error": message, "fields": fields }),
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<EventError>,
{
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

/// Wraps axum's body rejection so malformed JSON gets the same error shape.
pub fn reject_body(rejection: JsonRejection) -> AppError {
    AppError(EventError::InvalidRequest(rejection.body_text()))
}

/// Maps an EventError to an HTTP response
pub fn map_error(err: EventError) -> Response {
    AppError(err).into_response()
}
