//! # Event Schema
//!
//! Validates an [`EventDraft`] and, when every rule holds, produces the typed
//! [`EventDescription`].
//!
//! ## Evaluation order
//!
//! 1. Base checks run independently on every field, so a form can show all
//!    of its problems at once.
//! 2. `start` and `end` are parsed with the frequency's date format (date-only
//!    for weekly, date-time otherwise) and `end` is compared against `start`
//!    when both parsed.
//! 3. Frequency-gated checks (`week_number`, `selected_months`,
//!    `selected_weekdays`) run only once `frequency` is known to be valid.
//!
//! Validation is total: malformed input yields a [`FieldErrors`] value, never
//! a panic.

mod field_errors;
pub mod rules;

pub use field_errors::{ErrorKind, FieldErrors, FieldIssue};

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use crate::{
    date_format::{self, DateFormat},
    models::{
        event::{EventDescription, EventDraft, WeekdayDraft},
        recurrence::{
            DayName, EditIntent, EndType, EventType, Frequency, Recurrence, WeekdaySchedule,
        },
    },
};

use rules::{DESCRIPTION_MAX_CHARS, as_integer, is_hex_color, present, present_value};

/// Validates `draft`, returning the accepted event or every failing field.
///
/// # Example
///
/// ```
/// use evently_core::{models::event::EventDraft, schema::{self, FieldIssue}};
///
/// let draft = EventDraft {
///     title: Some(String::new()),
///     ..EventDraft::default()
/// };
/// let errors = schema::validate(&draft).unwrap_err();
/// assert!(errors.contains("title", FieldIssue::Required));
/// ```
pub fn validate(draft: &EventDraft) -> Result<EventDescription, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = check_title(draft.title.as_deref(), &mut errors);
    let description = check_description(draft.description.as_deref(), &mut errors);
    let club_id = check_optional_id("club_id", draft.club_id.as_ref(), &mut errors);
    let class_id = check_optional_id("class_id", draft.class_id.as_ref(), &mut errors);
    let history_id = check_optional_id("history_id", draft.history_id.as_ref(), &mut errors);
    let background_color =
        check_color("background_color", draft.background_color.as_deref(), &mut errors);
    let color = check_color("color", draft.color.as_deref(), &mut errors);

    let frequency =
        check_required_choice::<Frequency>("frequency", draft.frequency.as_deref(), &mut errors);
    let format = frequency.map_or(DateFormat::DateTime, Frequency::date_format);
    let start = check_timestamp("start", draft.start.as_deref(), format, &mut errors);
    let end = check_timestamp("end", draft.end.as_deref(), format, &mut errors);
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.add("end", FieldIssue::MustBeAfterStart);
        }
    }

    let end_type =
        check_required_choice::<EndType>("end_type", draft.end_type.as_deref(), &mut errors);
    let repeat = check_repeat(draft.repeat.as_ref(), &mut errors);
    let event_type =
        check_required_choice::<EventType>("event_type", draft.event_type.as_deref(), &mut errors);
    let intent = check_intent(draft.intent.as_deref(), &mut errors);

    let recurrence =
        frequency.and_then(|frequency| check_recurrence(frequency, draft, &mut errors));

    if !errors.is_empty() {
        debug!(failing_fields = errors.len(), %errors, "event draft rejected");
        return Err(errors);
    }

    let (
        Some(title),
        Some(recurrence),
        Some(start),
        Some(end),
        Some(end_type),
        Some(repeat),
        Some(event_type),
    ) = (title, recurrence, start, end, end_type, repeat, event_type)
    else {
        return Err(errors);
    };

    debug!(frequency = %recurrence.frequency(), "event draft accepted");
    Ok(EventDescription {
        title,
        description,
        recurrence,
        start,
        end,
        end_type,
        repeat,
        background_color,
        color,
        club_id,
        class_id,
        history_id,
        intent,
        event_type,
    })
}

fn check_title(value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    match present(value) {
        Some(title) => Some(title.to_string()),
        None => {
            errors.add("title", FieldIssue::Required);
            None
        }
    }
}

fn check_description(value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    let description = value?;
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.add("description", FieldIssue::TooLong);
        return None;
    }
    Some(description.to_string())
}

fn check_optional_id(path: &str, value: Option<&Value>, errors: &mut FieldErrors) -> Option<i64> {
    let value = present_value(value)?;
    let id = as_integer(value);
    if id.is_none() {
        errors.add(path, FieldIssue::NotANumber);
    }
    id
}

fn check_color(path: &str, value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    let color = present(value)?;
    if !is_hex_color(color) {
        errors.add(path, FieldIssue::InvalidHex);
        return None;
    }
    Some(color.to_string())
}

/// A mandatory field holding one of a fixed set of names
fn check_required_choice<T: FromStr>(
    path: &str,
    value: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<T> {
    let Some(raw) = present(value) else {
        errors.add(path, FieldIssue::Required);
        return None;
    };
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        errors.add(path, FieldIssue::Invalid);
    }
    parsed
}

fn check_timestamp(
    path: &str,
    value: Option<&str>,
    format: DateFormat,
    errors: &mut FieldErrors,
) -> Option<NaiveDateTime> {
    let Some(raw) = present(value) else {
        errors.add(path, FieldIssue::Required);
        return None;
    };
    let parsed = date_format::parse_strict(raw, format);
    if parsed.is_none() {
        errors.add(path, FieldIssue::InvalidFormat);
    }
    parsed
}

fn check_repeat(value: Option<&Value>, errors: &mut FieldErrors) -> Option<u32> {
    let Some(value) = present_value(value) else {
        errors.add("repeat", FieldIssue::Required);
        return None;
    };
    let Some(repeat) = as_integer(value) else {
        errors.add("repeat", FieldIssue::NotANumber);
        return None;
    };
    if repeat < 0 {
        errors.add("repeat", FieldIssue::Negative);
        return None;
    }
    match u32::try_from(repeat) {
        Ok(repeat) => Some(repeat),
        Err(_) => {
            errors.add("repeat", FieldIssue::OutOfRange);
            None
        }
    }
}

fn check_intent(value: Option<&str>, errors: &mut FieldErrors) -> Option<EditIntent> {
    let raw = present(value)?;
    let intent = raw.parse().ok();
    if intent.is_none() {
        errors.add("type", FieldIssue::Invalid);
    }
    intent
}

/// Frequency-gated checks. Every branch evaluates all of its fields before
/// combining them so each failure is reported.
fn check_recurrence(
    frequency: Frequency,
    draft: &EventDraft,
    errors: &mut FieldErrors,
) -> Option<Recurrence> {
    match frequency {
        Frequency::Hourly => Some(Recurrence::Hourly),
        Frequency::Daily => Some(Recurrence::Daily),
        Frequency::Weekly => {
            let selected_weekdays = check_weekdays(draft.selected_weekdays.as_deref(), errors)?;
            Some(Recurrence::Weekly { selected_weekdays })
        }
        Frequency::Monthly => {
            let week_number = check_week_numbers(draft.week_number.as_deref(), errors);
            let selected_weekdays = check_weekdays(draft.selected_weekdays.as_deref(), errors);
            Some(Recurrence::Monthly {
                week_number: week_number?,
                selected_weekdays: selected_weekdays?,
            })
        }
        Frequency::Yearly => {
            let selected_months = check_months(draft.selected_months.as_deref(), errors);
            let selected_weekdays = check_weekdays(draft.selected_weekdays.as_deref(), errors);
            Some(Recurrence::Yearly {
                selected_months: selected_months?,
                selected_weekdays: selected_weekdays?,
            })
        }
    }
}

/// A list that must exist and hold at least one element
fn check_non_empty<'a, T>(
    path: &str,
    value: Option<&'a [T]>,
    errors: &mut FieldErrors,
) -> Option<&'a [T]> {
    match value {
        None => {
            errors.add(path, FieldIssue::Required);
            None
        }
        Some([]) => {
            errors.add(path, FieldIssue::AtLeastOneRequired);
            None
        }
        Some(items) => Some(items),
    }
}

fn check_week_numbers(value: Option<&[Value]>, errors: &mut FieldErrors) -> Option<Vec<i64>> {
    let items = check_non_empty("week_number", value, errors)?;
    let mut week_numbers = Vec::with_capacity(items.len());
    let mut valid = true;

    for (index, item) in items.iter().enumerate() {
        match as_integer(item) {
            Some(week) => week_numbers.push(week),
            None => {
                errors.add(format!("week_number[{index}]"), FieldIssue::NotANumber);
                valid = false;
            }
        }
    }

    valid.then_some(week_numbers)
}

fn check_months(value: Option<&[Value]>, errors: &mut FieldErrors) -> Option<Vec<u32>> {
    let items = check_non_empty("selected_months", value, errors)?;
    let mut months = Vec::with_capacity(items.len());
    let mut valid = true;

    for (index, item) in items.iter().enumerate() {
        let path = format!("selected_months[{index}]");
        match as_integer(item) {
            Some(month @ 1..=12) => months.push(month as u32),
            Some(_) => {
                errors.add(path, FieldIssue::OutOfRange);
                valid = false;
            }
            None => {
                errors.add(path, FieldIssue::NotANumber);
                valid = false;
            }
        }
    }

    valid.then_some(months)
}

fn check_weekdays(
    value: Option<&[WeekdayDraft]>,
    errors: &mut FieldErrors,
) -> Option<Vec<WeekdaySchedule>> {
    let entries = check_non_empty("selected_weekdays", value, errors)?;
    let schedules: Vec<Option<WeekdaySchedule>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| check_weekday(index, entry, errors))
        .collect();

    schedules.into_iter().collect()
}

fn check_weekday(
    index: usize,
    entry: &WeekdayDraft,
    errors: &mut FieldErrors,
) -> Option<WeekdaySchedule> {
    let prefix = format!("selected_weekdays[{index}]");

    let day_of_week = check_required_choice::<DayName>(
        &format!("{prefix}.day_of_week"),
        entry.day_of_week.as_deref(),
        errors,
    );
    let start_time = check_time_of_day(
        &format!("{prefix}.start_time"),
        entry.start_time.as_deref(),
        errors,
    );
    let end_time = check_time_of_day(
        &format!("{prefix}.end_time"),
        entry.end_time.as_deref(),
        errors,
    );

    // None: absent, Some(None): not numeric
    let event_id = present_value(entry.event_id.as_ref()).map(as_integer);
    if let Some(None) = event_id {
        errors.add(format!("{prefix}.event_id"), FieldIssue::NotANumber);
    }

    Some(WeekdaySchedule {
        day_of_week: day_of_week?,
        start_time: start_time?,
        end_time: end_time?,
        event_id: match event_id {
            None => None,
            Some(id) => Some(id?),
        },
    })
}

fn check_time_of_day(
    path: &str,
    value: Option<&str>,
    errors: &mut FieldErrors,
) -> Option<chrono::NaiveTime> {
    let Some(raw) = present(value) else {
        errors.add(path, FieldIssue::Required);
        return None;
    };
    let parsed = date_format::parse_time_of_day(raw);
    if parsed.is_none() {
        errors.add(path, FieldIssue::InvalidFormat);
    }
    parsed
}
