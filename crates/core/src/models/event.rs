use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::date_format::{self, DateFormat};

use super::recurrence::{EditIntent, EndType, EventType, Recurrence, WeekdaySchedule};

/// The flat form shape of an event as the dashboard edits it.
///
/// Every field is optional and loosely typed so that whatever the form holds
/// mid-edit can be represented and reported on. Numeric fields accept JSON
/// numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub end_type: Option<String>,
    pub repeat: Option<Value>,
    pub week_number: Option<Vec<Value>>,
    pub selected_months: Option<Vec<Value>>,
    pub selected_weekdays: Option<Vec<WeekdayDraft>>,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub club_id: Option<Value>,
    pub class_id: Option<Value>,
    pub history_id: Option<Value>,
    #[serde(rename = "type")]
    pub intent: Option<String>,
    pub event_type: Option<String>,
}

impl EventDraft {
    /// The draft a "new event" dialog opens with
    pub fn blank() -> Self {
        Self {
            title: Some(String::new()),
            start: Some(String::new()),
            end: Some(String::new()),
            end_type: Some(EndType::On.as_str().to_string()),
            repeat: Some(Value::from(0)),
            ..Self::default()
        }
    }
}

/// One row of the weekday-schedule editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdayDraft {
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub event_id: Option<Value>,
}

impl From<&WeekdaySchedule> for WeekdayDraft {
    fn from(schedule: &WeekdaySchedule) -> Self {
        Self {
            day_of_week: Some(schedule.day_of_week.as_str().to_string()),
            start_time: Some(
                schedule
                    .start_time
                    .format(date_format::TIME_OF_DAY_PATTERN)
                    .to_string(),
            ),
            end_time: Some(
                schedule
                    .end_time
                    .format(date_format::TIME_OF_DAY_PATTERN)
                    .to_string(),
            ),
            event_id: schedule.event_id.map(Value::from),
        }
    }
}

/// An accepted event: every field typed, only the fields its frequency allows.
///
/// Serializes flat, with `start`/`end` written in the format its frequency
/// uses, so the JSON reads back as a valid [`EventDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescription {
    pub title: String,
    pub description: Option<String>,
    pub recurrence: Recurrence,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub end_type: EndType,
    pub repeat: u32,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub club_id: Option<i64>,
    pub class_id: Option<i64>,
    pub history_id: Option<i64>,
    pub intent: Option<EditIntent>,
    pub event_type: EventType,
}

impl EventDescription {
    /// `start`/`end` format for this event's frequency
    pub fn date_format(&self) -> DateFormat {
        self.recurrence.frequency().date_format()
    }
}

/// Wire shape of an [`EventDescription`]
#[derive(Serialize)]
struct EventRecord<'a> {
    title: &'a str,
    description: Option<&'a str>,
    #[serde(flatten)]
    recurrence: &'a Recurrence,
    start: String,
    end: String,
    end_type: EndType,
    repeat: u32,
    background_color: Option<&'a str>,
    color: Option<&'a str>,
    club_id: Option<i64>,
    class_id: Option<i64>,
    history_id: Option<i64>,
    #[serde(rename = "type")]
    intent: Option<EditIntent>,
    event_type: EventType,
}

impl Serialize for EventDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let format = self.date_format();
        EventRecord {
            title: &self.title,
            description: self.description.as_deref(),
            recurrence: &self.recurrence,
            start: date_format::format(&self.start, format),
            end: date_format::format(&self.end, format),
            end_type: self.end_type,
            repeat: self.repeat,
            background_color: self.background_color.as_deref(),
            color: self.color.as_deref(),
            club_id: self.club_id,
            class_id: self.class_id,
            history_id: self.history_id,
            intent: self.intent,
            event_type: self.event_type,
        }
        .serialize(serializer)
    }
}

/// Populates an edit form from an accepted or persisted event.
impl From<&EventDescription> for EventDraft {
    fn from(event: &EventDescription) -> Self {
        let format = event.date_format();
        let weekdays = |schedules: &[WeekdaySchedule]| {
            Some(schedules.iter().map(WeekdayDraft::from).collect::<Vec<_>>())
        };

        let (week_number, selected_months, selected_weekdays) = match &event.recurrence {
            Recurrence::Hourly | Recurrence::Daily => (None, None, None),
            Recurrence::Weekly { selected_weekdays } => (None, None, weekdays(selected_weekdays)),
            Recurrence::Monthly {
                week_number,
                selected_weekdays,
            } => (
                Some(week_number.iter().copied().map(Value::from).collect()),
                None,
                weekdays(selected_weekdays),
            ),
            Recurrence::Yearly {
                selected_months,
                selected_weekdays,
            } => (
                None,
                Some(selected_months.iter().copied().map(Value::from).collect()),
                weekdays(selected_weekdays),
            ),
        };

        Self {
            title: Some(event.title.clone()),
            description: event.description.clone(),
            frequency: Some(event.recurrence.frequency().as_str().to_string()),
            start: Some(date_format::format(&event.start, format)),
            end: Some(date_format::format(&event.end, format)),
            end_type: Some(event.end_type.as_str().to_string()),
            repeat: Some(Value::from(event.repeat)),
            week_number,
            selected_months,
            selected_weekdays,
            background_color: event.background_color.clone(),
            color: event.color.clone(),
            club_id: event.club_id.map(Value::from),
            class_id: event.class_id.map(Value::from),
            history_id: event.history_id.map(Value::from),
            intent: event.intent.map(|intent| intent.as_str().to_string()),
            event_type: Some(event.event_type.as_str().to_string()),
        }
    }
}
