use axum::http::StatusCode;
use evently_api::{
    config::{ApiConfig, parse_log_level},
    middleware::error_handling::map_error,
};
use evently_core::{
    errors::EventError,
    schema::{FieldErrors, FieldIssue},
};
use rstest::rstest;
use tracing::Level;

#[tokio::test]
async fn test_error_handling_validation() {
    let mut fields = FieldErrors::new();
    fields.add("week_number", FieldIssue::AtLeastOneRequired);

    let response = map_error(EventError::Validation(fields));

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_error_handling_invalid_request() {
    let response = map_error(EventError::InvalidRequest("bad body".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_serialization() {
    let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();

    let response = map_error(EventError::Serialization(json_error));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = EventError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("debug", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] raw: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(raw), expected);
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.shortcuts.shortcuts.len(), 4);
}
