use evently_core::{
    models::event::{EventDraft, WeekdayDraft},
    normalizer::normalize,
    schema,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn draft(value: Value) -> EventDraft {
    serde_json::from_value(value).expect("draft should deserialize")
}

fn yearly_gala() -> EventDraft {
    draft(json!({
        "title": "Gala",
        "description": "Annual dinner",
        "frequency": "yearly",
        "start": "2024-03-01 18:00",
        "end": "2024-03-01 23:00",
        "end_type": "forever",
        "repeat": 3,
        "selected_months": [3, 7],
        "selected_weekdays": [
            { "day_of_week": "saturday", "start_time": "18:00", "end_time": "23:00" }
        ],
        "background_color": "#112233",
        "color": "#fff",
        "club_id": 4,
        "event_type": "package"
    }))
}

fn monday_row() -> WeekdayDraft {
    WeekdayDraft {
        day_of_week: Some("monday".into()),
        start_time: Some("09:00".into()),
        end_time: Some("10:00".into()),
        event_id: None,
    }
}

#[test]
fn test_yearly_to_weekly_drops_month_and_week_fields() {
    let weekly = normalize(&yearly_gala(), "weekly");

    assert_eq!(weekly.frequency.as_deref(), Some("weekly"));
    assert_eq!(weekly.selected_months, None);
    assert_eq!(weekly.week_number, None);
    assert_eq!(weekly.selected_weekdays, yearly_gala().selected_weekdays);
    assert_eq!(weekly.start.as_deref(), Some("2024-03-01"));
    assert_eq!(weekly.end.as_deref(), Some("2024-03-01"));
}

#[test]
fn test_preserves_descriptive_fields_and_resets_repeat() {
    let before = yearly_gala();

    for frequency in ["hourly", "daily", "weekly", "monthly", "yearly"] {
        let after = normalize(&before, frequency);

        assert_eq!(after.title, before.title, "{frequency}");
        assert_eq!(after.description, before.description, "{frequency}");
        assert_eq!(after.background_color, before.background_color, "{frequency}");
        assert_eq!(after.color, before.color, "{frequency}");
        assert_eq!(after.end_type, before.end_type, "{frequency}");
        assert_eq!(after.event_type, before.event_type, "{frequency}");
        assert_eq!(after.club_id, before.club_id, "{frequency}");
        assert_eq!(after.repeat, Some(json!(0)), "{frequency}");
    }
}

#[test]
fn test_daily_clears_every_list() {
    let daily = normalize(&yearly_gala(), "daily");

    assert_eq!(daily.week_number, None);
    assert_eq!(daily.selected_months, None);
    assert_eq!(daily.selected_weekdays, Some(vec![]));
    assert_eq!(daily.start.as_deref(), Some("2024-03-01 18:00"));
}

#[test]
fn test_monthly_keeps_week_number() {
    let mut current = yearly_gala();
    current.week_number = Some(vec![json!(2)]);
    let monthly = normalize(&current, "monthly");

    assert_eq!(monthly.week_number, Some(vec![json!(2)]));
    assert_eq!(monthly.selected_months, None);
    assert_eq!(monthly.selected_weekdays, current.selected_weekdays);
}

#[test]
fn test_yearly_keeps_months_and_clears_week_number() {
    let mut current = yearly_gala();
    current.frequency = Some("monthly".into());
    current.week_number = Some(vec![json!(1)]);
    let yearly = normalize(&current, "yearly");

    assert_eq!(yearly.selected_months, Some(vec![json!(3), json!(7)]));
    assert_eq!(yearly.week_number, None);
}

#[rstest]
#[case("weekly")]
#[case("monthly")]
#[case("yearly")]
fn test_seeds_one_blank_weekday_row(#[case] frequency: &str) {
    let mut current = yearly_gala();
    current.selected_weekdays = Some(vec![]);
    let next = normalize(&current, frequency);
    assert_eq!(next.selected_weekdays, Some(vec![WeekdayDraft::default()]));

    current.selected_weekdays = None;
    let next = normalize(&current, frequency);
    assert_eq!(next.selected_weekdays, Some(vec![WeekdayDraft::default()]));
}

#[test]
fn test_missing_span_becomes_blank() {
    let next = normalize(&EventDraft::default(), "monthly");

    assert_eq!(next.start.as_deref(), Some(""));
    assert_eq!(next.end.as_deref(), Some(""));
}

#[test]
fn test_unparseable_span_is_left_for_the_schema() {
    let mut current = yearly_gala();
    current.start = Some("tomorrow".into());
    let next = normalize(&current, "weekly");

    assert_eq!(next.start.as_deref(), Some("tomorrow"));
    let errors = schema::validate(&next).unwrap_err();
    assert!(errors.contains("start", schema::FieldIssue::InvalidFormat));
}

#[test]
fn test_hourly_only_switches_frequency() {
    let before = yearly_gala();
    let hourly = normalize(&before, "hourly");

    let expected = EventDraft {
        frequency: Some("hourly".into()),
        repeat: Some(json!(0)),
        ..before
    };
    assert_eq!(hourly, expected);
}

#[test]
fn test_unrecognized_frequency_is_not_rejected_here() {
    let next = normalize(&yearly_gala(), "fortnightly");

    assert_eq!(next.frequency.as_deref(), Some("fortnightly"));
    assert_eq!(next.selected_months, yearly_gala().selected_months);
    let errors = schema::validate(&next).unwrap_err();
    assert!(errors.contains("frequency", schema::FieldIssue::Invalid));
}

#[rstest]
#[case("hourly")]
#[case("daily")]
#[case("weekly")]
#[case("monthly")]
#[case("yearly")]
fn test_normalize_is_idempotent(#[case] frequency: &str) {
    let mut current = yearly_gala();
    current.week_number = Some(vec![json!(1)]);

    let once = normalize(&current, frequency);
    let twice = normalize(&once, frequency);
    assert_eq!(twice, once);
}

#[test]
fn test_daily_weekly_daily_round_trip() {
    let daily = draft(json!({
        "title": "Standup",
        "frequency": "daily",
        "start": "2024-01-01 09:00",
        "end": "2024-01-02 10:00",
        "end_type": "on",
        "repeat": 0,
        "event_type": "other"
    }));
    assert!(schema::validate(&daily).is_ok());

    let mut weekly = normalize(&daily, "weekly");
    assert_eq!(weekly.start.as_deref(), Some("2024-01-01"));
    assert_eq!(weekly.end.as_deref(), Some("2024-01-02"));
    weekly.selected_weekdays = Some(vec![monday_row()]);
    let errors = schema::validate(&weekly).err().unwrap_or_default();
    assert!(errors.get("start").is_empty() && errors.get("end").is_empty());
    assert!(schema::validate(&weekly).is_ok());

    let back = normalize(&weekly, "daily");
    assert_eq!(back.start.as_deref(), Some("2024-01-01 00:00"));
    assert_eq!(back.end.as_deref(), Some("2024-01-02 00:00"));
    assert!(schema::validate(&back).is_ok());
}

#[test]
fn test_stale_week_number_does_not_survive_into_weekly() {
    let mut monthly = yearly_gala();
    monthly.frequency = Some("monthly".into());
    monthly.week_number = Some(vec![json!(4)]);

    let weekly = normalize(&monthly, "weekly");
    assert_eq!(weekly.week_number, None);

    let monthly_again = normalize(&weekly, "monthly");
    let errors = schema::validate(&monthly_again).unwrap_err();
    assert!(errors.contains("week_number", schema::FieldIssue::Required));
}
