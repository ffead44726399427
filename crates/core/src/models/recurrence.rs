use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{
    date_format::{self, DateFormat},
    errors::UnknownValue,
};

/// Recurrence cadence of an event. Drives which other fields are required and
/// how `start`/`end` are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Hourly,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// Textual format of `start`/`end` under this frequency
    pub fn date_format(self) -> DateFormat {
        match self {
            Frequency::Weekly => DateFormat::DateOnly,
            _ => DateFormat::DateTime,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| UnknownValue::new("frequency", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndType {
    On,
    Forever,
}

impl EndType {
    pub fn as_str(self) -> &'static str {
        match self {
            EndType::On => "on",
            EndType::Forever => "forever",
        }
    }
}

impl FromStr for EndType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(EndType::On),
            "forever" => Ok(EndType::Forever),
            _ => Err(UnknownValue::new("end type", s)),
        }
    }
}

/// What the event is about, independent of its cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Package,
    Class,
    Other,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Package => "package",
            EventType::Class => "class",
            EventType::Other => "other",
        }
    }
}

impl FromStr for EventType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "package" => Ok(EventType::Package),
            "class" => Ok(EventType::Class),
            "other" => Ok(EventType::Other),
            _ => Err(UnknownValue::new("event type", s)),
        }
    }
}

/// Edit intent tag set by the calling UI. Has no bearing on the rule itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditIntent {
    Update,
    Delete,
}

impl EditIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            EditIntent::Update => "update",
            EditIntent::Delete => "delete",
        }
    }
}

impl FromStr for EditIntent {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "update" => Ok(EditIntent::Update),
            "delete" => Ok(EditIntent::Delete),
            _ => Err(UnknownValue::new("edit intent", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayName {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayName {
    pub const ALL: [DayName; 7] = [
        DayName::Sunday,
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Sunday => "sunday",
            DayName::Monday => "monday",
            DayName::Tuesday => "tuesday",
            DayName::Wednesday => "wednesday",
            DayName::Thursday => "thursday",
            DayName::Friday => "friday",
            DayName::Saturday => "saturday",
        }
    }
}

impl FromStr for DayName {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayName::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownValue::new("day of week", s))
    }
}

/// A recurring time window on one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySchedule {
    pub day_of_week: DayName,
    #[serde(with = "date_format::serde_time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "date_format::serde_time_of_day")]
    pub end_time: NaiveTime,
    pub event_id: Option<i64>,
}

/// The frequency together with the fields only that frequency carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Recurrence {
    Hourly,
    Daily,
    Weekly {
        selected_weekdays: Vec<WeekdaySchedule>,
    },
    Monthly {
        week_number: Vec<i64>,
        selected_weekdays: Vec<WeekdaySchedule>,
    },
    Yearly {
        selected_months: Vec<u32>,
        selected_weekdays: Vec<WeekdaySchedule>,
    },
}

impl Recurrence {
    pub fn frequency(&self) -> Frequency {
        match self {
            Recurrence::Hourly => Frequency::Hourly,
            Recurrence::Daily => Frequency::Daily,
            Recurrence::Weekly { .. } => Frequency::Weekly,
            Recurrence::Monthly { .. } => Frequency::Monthly,
            Recurrence::Yearly { .. } => Frequency::Yearly,
        }
    }

    /// Weekday schedules, empty for hourly and daily rules
    pub fn weekdays(&self) -> &[WeekdaySchedule] {
        match self {
            Recurrence::Hourly | Recurrence::Daily => &[],
            Recurrence::Weekly { selected_weekdays }
            | Recurrence::Monthly { selected_weekdays, .. }
            | Recurrence::Yearly { selected_weekdays, .. } => selected_weekdays,
        }
    }
}
