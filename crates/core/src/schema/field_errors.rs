use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer};

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A mandatory field is missing or empty
    Required,
    /// A field does not match its lexical pattern
    Format,
    /// A well-formed field is outside its legal domain
    Range,
    /// Two fields disagree with each other
    CrossField,
}

/// A single rule violation on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    NotANumber,
    TooLong,
    Invalid,
    InvalidHex,
    InvalidFormat,
    Negative,
    AtLeastOneRequired,
    OutOfRange,
    MustBeAfterStart,
}

impl FieldIssue {
    pub fn message(self) -> &'static str {
        match self {
            FieldIssue::Required => "required",
            FieldIssue::NotANumber => "must be a number",
            FieldIssue::TooLong => "too long",
            FieldIssue::Invalid => "invalid",
            FieldIssue::InvalidHex => "invalid hex",
            FieldIssue::InvalidFormat => "invalid format",
            FieldIssue::Negative => "must be at least 0",
            FieldIssue::AtLeastOneRequired => "at least one required",
            FieldIssue::OutOfRange => "out of range",
            FieldIssue::MustBeAfterStart => "must be after start",
        }
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            FieldIssue::Required => ErrorKind::Required,
            FieldIssue::NotANumber
            | FieldIssue::Invalid
            | FieldIssue::InvalidHex
            | FieldIssue::InvalidFormat => ErrorKind::Format,
            FieldIssue::TooLong
            | FieldIssue::Negative
            | FieldIssue::AtLeastOneRequired
            | FieldIssue::OutOfRange => ErrorKind::Range,
            FieldIssue::MustBeAfterStart => ErrorKind::CrossField,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validation failures keyed by field path, e.g. `title` or
/// `selected_weekdays[0].start_time`.
///
/// Paths iterate in lexical order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldIssue>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, issue: FieldIssue) {
        self.0.entry(path.into()).or_default().push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Issues recorded against `path`, empty if it passed
    pub fn get(&self, path: &str) -> &[FieldIssue] {
        self.0.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, path: &str, issue: FieldIssue) -> bool {
        self.get(path).contains(&issue)
    }

    /// Paths that failed
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldIssue])> {
        self.0.iter().map(|(path, issues)| (path.as_str(), issues.as_slice()))
    }

    /// Issues on `path` and on any of its nested paths
    pub fn under<'a>(&'a self, path: &'a str) -> impl Iterator<Item = (&'a str, FieldIssue)> + 'a {
        self.iter()
            .filter(move |(field, _)| {
                *field == path
                    || field
                        .strip_prefix(path)
                        .is_some_and(|rest| rest.starts_with('[') || rest.starts_with('.'))
            })
            .flat_map(|(field, issues)| issues.iter().map(move |issue| (field, *issue)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, issues) in self.iter() {
            for issue in issues {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{path}: {issue}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Serializes as `{ "path": ["message", ...] }`
impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(path, issues)| {
            (
                path,
                issues.iter().map(|issue| issue.message()).collect::<Vec<_>>(),
            )
        }))
    }
}
