pub mod event;
pub mod recurrence;
pub mod requests;
