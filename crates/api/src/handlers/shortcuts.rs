use axum::{Json, extract::State};
use chrono::Local;
use evently_core::shortcuts::{DateShortcut, build_shortcuts};
use std::sync::Arc;

use crate::ApiState;

/// Date-picker quick picks resolved against the server's current date
pub async fn list_shortcuts(State(state): State<Arc<ApiState>>) -> Json<Vec<DateShortcut>> {
    let today = Local::now().date_naive();
    Json(build_shortcuts(&state.shortcuts, today))
}
