//! # Evently Core
//!
//! The core crate holds the recurring-event rule engine used by the Evently
//! dashboard. It knows nothing about HTTP or storage.
//!
//! ## Architecture
//!
//! - **Date format**: strict parse/format helpers for the two textual timestamp patterns
//! - **Schema**: validates a draft and produces a typed [`models::event::EventDescription`]
//! - **Normalizer**: reshapes a draft when its frequency changes
//! - **Form**: the call pattern a form controller follows around the two
//! - **Shortcuts**: date-picker shortcut lists built from explicit configuration

/// Strict date/time parsing and formatting
pub mod date_format;
/// Crate-level error types
pub mod errors;
/// Form-controller boundary around the schema and normalizer
pub mod form;
/// Draft, typed record and request/response models
pub mod models;
/// Frequency-change normalization
pub mod normalizer;
/// Event validation
pub mod schema;
/// Date-picker shortcut lists
pub mod shortcuts;
