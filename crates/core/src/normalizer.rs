//! # Frequency-Change Normalizer
//!
//! When the frequency of an in-progress event changes, the fields that belong
//! to the old frequency must not linger into the new one. [`normalize`]
//! reshapes a draft for its new frequency:
//!
//! | target  | start/end          | week_number | selected_months | selected_weekdays |
//! |---------|--------------------|-------------|-----------------|-------------------|
//! | daily   | `YYYY-MM-DD HH:mm` | cleared     | cleared         | `[]`              |
//! | weekly  | `YYYY-MM-DD`       | cleared     | cleared         | kept or seeded    |
//! | monthly | `YYYY-MM-DD HH:mm` | kept        | cleared         | kept or seeded    |
//! | yearly  | `YYYY-MM-DD HH:mm` | cleared     | kept            | kept or seeded    |
//! | hourly  | untouched          | untouched   | untouched       | untouched         |
//!
//! Every other field is carried over verbatim, except `repeat` which always
//! restarts at zero. Unrecognized frequencies fall through the hourly branch
//! and are reported by the schema on the next validation pass.

use serde_json::Value;
use tracing::debug;

use crate::{
    date_format::{self, DateFormat},
    models::{
        event::{EventDraft, WeekdayDraft},
        recurrence::Frequency,
    },
};

/// Returns `current` reshaped for `new_frequency`.
///
/// Normalizing an already normalized draft for the same frequency returns it
/// unchanged.
///
/// # Example
///
/// ```
/// use evently_core::{models::event::EventDraft, normalizer::normalize};
///
/// let draft = EventDraft {
///     frequency: Some("daily".into()),
///     start: Some("2024-01-01 09:00".into()),
///     ..EventDraft::default()
/// };
/// let weekly = normalize(&draft, "weekly");
/// assert_eq!(weekly.start.as_deref(), Some("2024-01-01"));
/// assert_eq!(weekly.selected_weekdays.map(|rows| rows.len()), Some(1));
/// ```
pub fn normalize(current: &EventDraft, new_frequency: &str) -> EventDraft {
    let mut next = current.clone();
    next.frequency = Some(new_frequency.to_string());
    next.repeat = Some(Value::from(0));

    let Ok(frequency) = new_frequency.parse::<Frequency>() else {
        debug!(frequency = new_frequency, "unrecognized frequency left unshaped");
        return next;
    };

    match frequency {
        Frequency::Hourly => {}
        Frequency::Daily => {
            reformat_span(&mut next, DateFormat::DateTime);
            next.week_number = None;
            next.selected_months = None;
            next.selected_weekdays = Some(Vec::new());
        }
        Frequency::Weekly => {
            reformat_span(&mut next, DateFormat::DateOnly);
            next.week_number = None;
            next.selected_months = None;
            seed_weekdays(&mut next);
        }
        Frequency::Monthly => {
            reformat_span(&mut next, DateFormat::DateTime);
            next.selected_months = None;
            seed_weekdays(&mut next);
        }
        Frequency::Yearly => {
            reformat_span(&mut next, DateFormat::DateTime);
            next.week_number = None;
            seed_weekdays(&mut next);
        }
    }

    debug!(%frequency, "event draft normalized");
    next
}

fn reformat_span(draft: &mut EventDraft, target: DateFormat) {
    draft.start = Some(reformat_or_blank(draft.start.as_deref(), target));
    draft.end = Some(reformat_or_blank(draft.end.as_deref(), target));
}

/// Missing values become `""`; values in neither format are kept as typed so
/// the schema can flag them.
fn reformat_or_blank(value: Option<&str>, target: DateFormat) -> String {
    match value {
        None | Some("") => String::new(),
        Some(raw) => date_format::reformat(raw, target).unwrap_or_else(|| raw.to_string()),
    }
}

/// Keeps existing weekday rows, or seeds one blank row for the editor.
fn seed_weekdays(draft: &mut EventDraft) {
    let has_rows = draft
        .selected_weekdays
        .as_ref()
        .is_some_and(|rows| !rows.is_empty());

    if !has_rows {
        draft.selected_weekdays = Some(vec![WeekdayDraft::default()]);
    }
}
