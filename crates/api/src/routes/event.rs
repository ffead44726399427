use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/events/validate", post(handlers::event::validate_event))
        .route("/api/events/normalize", post(handlers::event::normalize_event))
        .route("/api/events/submit", post(handlers::event::submit_event))
        .route("/api/events/shortcuts", get(handlers::shortcuts::list_shortcuts))
}
