//! Rule export.
//!
//! - RRULE: RFC 5545 §3.3.10 recurrence rule values and `rrule` crate sets
//! - Summary: English descriptions for list screens

mod ical;
mod summary;

pub use ical::UntilForm;
