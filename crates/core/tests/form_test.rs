use evently_core::{
    errors::EventError,
    form::EventForm,
    models::{event::WeekdayDraft, recurrence::Frequency},
    schema::FieldIssue,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn filled_daily_form() -> EventForm {
    let mut form = EventForm::new();
    let draft = form.draft_mut();
    draft.title = Some("Pilates".into());
    draft.frequency = Some("daily".into());
    draft.start = Some("2024-05-01 07:00".into());
    draft.end = Some("2024-05-01 08:00".into());
    draft.event_type = Some("class".into());
    form
}

#[test]
fn test_new_form_starts_blank() {
    let form = EventForm::new();
    let draft = form.draft();

    assert_eq!(draft.title.as_deref(), Some(""));
    assert_eq!(draft.end_type.as_deref(), Some("on"));
    assert_eq!(draft.repeat, Some(json!(0)));
    assert_eq!(draft.frequency, None);

    let errors = form.check();
    assert!(errors.contains("title", FieldIssue::Required));
    assert!(errors.contains("frequency", FieldIssue::Required));
    assert!(errors.get("end_type").is_empty());
    assert!(errors.get("repeat").is_empty());
}

#[test]
fn test_submit_is_gated_on_errors() {
    let form = EventForm::new();
    match form.submit() {
        Err(EventError::Validation(errors)) => assert!(!errors.is_empty()),
        other => panic!("blank form must not submit: {other:?}"),
    }

    let event = filled_daily_form().submit().expect("filled form submits");
    assert_eq!(event.title, "Pilates");
    assert_eq!(event.recurrence.frequency(), Frequency::Daily);
}

#[test]
fn test_frequency_change_normalizes_then_validates() {
    let mut form = filled_daily_form();

    let errors = form.change_frequency("weekly");
    assert_eq!(form.draft().start.as_deref(), Some("2024-05-01"));
    assert_eq!(form.draft().selected_weekdays, Some(vec![WeekdayDraft::default()]));
    assert!(errors.contains("selected_weekdays[0].day_of_week", FieldIssue::Required));
    // same day in date-only form
    assert!(errors.contains("end", FieldIssue::MustBeAfterStart));

    let draft = form.draft_mut();
    draft.end = Some("2024-05-08".into());
    draft.selected_weekdays = Some(vec![WeekdayDraft {
        day_of_week: Some("wednesday".into()),
        start_time: Some("07:00".into()),
        end_time: Some("08:00".into()),
        event_id: None,
    }]);
    assert!(form.check().is_empty());
    assert!(form.submit().is_ok());
}

#[test]
fn test_edit_round_trips_an_accepted_event() {
    let event = filled_daily_form().submit().unwrap();
    let form = EventForm::edit(&event);

    assert_eq!(form.draft().start.as_deref(), Some("2024-05-01 07:00"));
    assert_eq!(form.submit().unwrap(), event);
}
