//! Date-picker shortcuts.
//!
//! The pickers for `start`/`end` offer quick picks such as "Tomorrow". The
//! list is built from a [`ShortcutConfig`] handed in by whoever constructs
//! the picker; there is no process-wide table to mutate.

use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date_format::{self, DateFormat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut entry {0:?} is not of the form label=<n>d or label=<n>m")]
    Malformed(String),

    #[error("shortcut entry {0:?} has an empty label")]
    EmptyLabel(String),
}

/// Distance from today a shortcut points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "amount")]
pub enum ShortcutOffset {
    Days(i64),
    Months(u32),
}

impl ShortcutOffset {
    /// `None` if the result falls outside chrono's date range
    pub fn apply(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ShortcutOffset::Days(days) => today.checked_add_signed(Duration::try_days(days)?),
            ShortcutOffset::Months(months) => today.checked_add_months(Months::new(months)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutSpec {
    pub label: String,
    pub offset: ShortcutOffset,
}

impl ShortcutSpec {
    pub fn new(label: &str, offset: ShortcutOffset) -> Self {
        Self {
            label: label.to_string(),
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    pub shortcuts: Vec<ShortcutSpec>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            shortcuts: vec![
                ShortcutSpec::new("Today", ShortcutOffset::Days(0)),
                ShortcutSpec::new("Tomorrow", ShortcutOffset::Days(1)),
                ShortcutSpec::new("Next week", ShortcutOffset::Days(7)),
                ShortcutSpec::new("Next month", ShortcutOffset::Months(1)),
            ],
        }
    }
}

/// Parses `Today=0d,Tomorrow=1d,Next month=1m`
impl FromStr for ShortcutConfig {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shortcuts = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { shortcuts })
    }
}

fn parse_entry(entry: &str) -> Result<ShortcutSpec, ShortcutParseError> {
    let malformed = || ShortcutParseError::Malformed(entry.to_string());

    let (label, offset) = entry.rsplit_once('=').ok_or_else(malformed)?;
    let label = label.trim();
    if label.is_empty() {
        return Err(ShortcutParseError::EmptyLabel(entry.to_string()));
    }

    let offset = offset.trim();
    let offset = if let Some(days) = offset.strip_suffix('d') {
        ShortcutOffset::Days(days.parse().map_err(|_| malformed())?)
    } else if let Some(months) = offset.strip_suffix('m') {
        ShortcutOffset::Months(months.parse().map_err(|_| malformed())?)
    } else {
        return Err(malformed());
    };

    Ok(ShortcutSpec::new(label, offset))
}

/// One resolved quick pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateShortcut {
    pub label: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Resolves `config` against `today`, in configured order. Shortcuts whose
/// date is out of range are dropped.
pub fn build_shortcuts(config: &ShortcutConfig, today: NaiveDate) -> Vec<DateShortcut> {
    config
        .shortcuts
        .iter()
        .filter_map(|spec| {
            let date = spec.offset.apply(today)?.and_hms_opt(0, 0, 0)?;
            Some(DateShortcut {
                label: spec.label.clone(),
                date: date_format::format(&date, DateFormat::DateOnly),
            })
        })
        .collect()
}
