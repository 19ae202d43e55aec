//! Recurrence rules.
//!
//! - `core`: The rule data model
//! - `validate`: Normalization of raw editor input into a rule
//! - `expand`: Occurrence generation
//! - `build`: RFC 5545 RRULE export and English summaries

pub mod build;
pub mod core;
pub mod expand;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export commonly used items at module level
pub use self::core::{AnchoredRule, MonthlyMode, Ordinal, Pattern, RecurrenceRule, Termination, Unit};
pub use expand::{ExpansionOptions, Occurrences, generate};
pub use validate::{RecurrenceInput, validate};
