use axum::http::StatusCode;
use chrono::Local;
use evently_core::shortcuts::{ShortcutConfig, ShortcutOffset, ShortcutSpec};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, weekly_yoga};

#[test_log::test(tokio::test)]
async fn test_validate_accepts_weekly_event() {
    let server = TestContext::new().server();

    let response = server.post("/api/events/validate").json(&weekly_yoga()).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["valid"], true);
    assert_eq!(body["errors"], json!({}));
    assert_eq!(body["event"]["frequency"], "weekly");
    assert_eq!(body["event"]["start"], "2024-01-01");
    assert_eq!(body["event"]["end"], "2024-01-08");
    assert_eq!(
        body["event"]["selected_weekdays"],
        json!([{
            "day_of_week": "monday",
            "start_time": "09:00",
            "end_time": "10:00",
            "event_id": null
        }])
    );
}

#[tokio::test]
async fn test_validate_reports_field_errors() {
    let server = TestContext::new().server();
    let mut draft = weekly_yoga();
    draft["end"] = json!("2023-12-25");
    draft["background_color"] = json!("#zzz");

    let response = server.post("/api/events/validate").json(&draft).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["errors"],
        json!({
            "background_color": ["invalid hex"],
            "end": ["must be after start"]
        })
    );
    assert!(body.get("event").is_none());
}

#[tokio::test]
async fn test_validate_rejects_malformed_json() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/events/validate")
        .bytes("{\"title\":".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].as_str().unwrap().starts_with("Invalid request"));
}

#[test_log::test(tokio::test)]
async fn test_normalize_switches_to_weekly() {
    let server = TestContext::new().server();
    let request = json!({
        "draft": {
            "title": "Gala",
            "frequency": "yearly",
            "start": "2024-03-01 18:00",
            "end": "2024-03-08 23:00",
            "end_type": "on",
            "repeat": 2,
            "selected_months": [3, 7],
            "event_type": "package"
        },
        "frequency": "weekly"
    });

    let response = server.post("/api/events/normalize").json(&request).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let draft = &body["draft"];
    assert_eq!(draft["frequency"], "weekly");
    assert_eq!(draft["start"], "2024-03-01");
    assert_eq!(draft["end"], "2024-03-08");
    assert_eq!(draft["repeat"], 0);
    assert_eq!(draft["selected_months"], Value::Null);
    assert_eq!(draft["week_number"], Value::Null);
    assert_eq!(draft["selected_weekdays"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["errors"]["selected_weekdays[0].day_of_week"], json!(["required"]));
}

#[tokio::test]
async fn test_submit_returns_accepted_event() {
    let server = TestContext::new().server();

    let response = server.post("/api/events/submit").json(&weekly_yoga()).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Yoga");
    assert_eq!(body["event_type"], "class");
    assert_eq!(body["end"], "2024-01-08");
}

#[tokio::test]
async fn test_submitted_event_validates_again() {
    let server = TestContext::new().server();

    let accepted = server
        .post("/api/events/submit")
        .json(&weekly_yoga())
        .await
        .json::<Value>();
    let response = server.post("/api/events/validate").json(&accepted).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["valid"], true);
    assert_eq!(body["event"], accepted);
}

#[tokio::test]
async fn test_submit_rejects_invalid_draft() {
    let server = TestContext::new().server();
    let mut draft = weekly_yoga();
    draft["title"] = json!("");

    let response = server.post("/api/events/submit").json(&draft).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["fields"], json!({ "title": ["required"] }));
    assert_eq!(body["error"], "Validation error: title: required");
}

#[tokio::test]
async fn test_shortcuts_use_state_config() {
    let shortcuts = ShortcutConfig {
        shortcuts: vec![
            ShortcutSpec::new("Today", ShortcutOffset::Days(0)),
            ShortcutSpec::new("In a year", ShortcutOffset::Months(12)),
        ],
    };
    let server = TestContext::with_shortcuts(shortcuts).server();

    let response = server.get("/api/events/shortcuts").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["label"], "In a year");

    // Midnight rollover between request and assertion would skew by a day
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let yesterday = (Local::now().date_naive() - chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    let reported = entries[0]["date"].as_str().unwrap();
    assert!(reported == today || reported == yesterday);
}
