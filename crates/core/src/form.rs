//! Form-controller boundary.
//!
//! [`EventForm`] owns a draft and drives the schema and normalizer the way
//! the event dialog does: validate on every edit, normalize and re-validate
//! on every frequency change, and only hand the event on when nothing fails.

use tracing::info;

use crate::{
    errors::{EventError, EventResult},
    models::event::{EventDescription, EventDraft},
    normalizer, schema::{self, FieldErrors},
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    draft: EventDraft,
}

impl EventForm {
    /// A form for a new event
    pub fn new() -> Self {
        Self {
            draft: EventDraft::blank(),
        }
    }

    /// A form editing an existing event
    pub fn edit(event: &EventDescription) -> Self {
        Self {
            draft: EventDraft::from(event),
        }
    }

    pub fn from_draft(draft: EventDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Direct field edits. Changing `frequency` here skips normalization; use
    /// [`EventForm::change_frequency`] for that.
    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    pub fn into_draft(self) -> EventDraft {
        self.draft
    }

    /// Live validation of the current draft
    pub fn check(&self) -> FieldErrors {
        schema::validate(&self.draft).err().unwrap_or_default()
    }

    /// Reshapes the draft for `frequency` and returns the resulting errors
    pub fn change_frequency(&mut self, frequency: &str) -> FieldErrors {
        self.draft = normalizer::normalize(&self.draft, frequency);
        self.check()
    }

    /// Final, authoritative validation before the event leaves the form
    pub fn submit(&self) -> EventResult<EventDescription> {
        let event = schema::validate(&self.draft).map_err(EventError::Validation)?;
        info!(
            title = %event.title,
            frequency = %event.recurrence.frequency(),
            "event submitted"
        );
        Ok(event)
    }
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}
