//! Validation of raw recurrence editor input.
//!
//! Weekdays are numbered Sunday = 0 .. Saturday = 6 throughout.

mod input;
mod validator;


pub use input::{MonthlyModeInput, OrdinalInput, RecurrenceInput, TerminationInput};
pub use validator::validate;
