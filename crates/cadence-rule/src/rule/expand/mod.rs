//! Occurrence generation for recurrence rules.
//!
//! Expansion is pull-based: `generate` returns a lazy iterator bounded by a
//! caller-supplied cap, and `expand` collects a date window from it.

mod generator;
mod ordinal;
mod window;

pub use generator::{Occurrences, generate};
pub use ordinal::{last_day_of_month, resolve};
pub use window::{ExpansionOptions, expand};
