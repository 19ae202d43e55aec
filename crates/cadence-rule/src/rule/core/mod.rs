//! Recurrence rule data model.
//!
//! These types make the rule's invariants structural:
//! - the unit and its unit-specific data form a single `Pattern`
//! - termination is one `Termination` variant, never a pair of stale fields
//! - intervals and counts are `NonZeroU32`

mod rule;
mod weekday;

pub(crate) use rule::check_end_date;
pub use rule::{
    AnchoredRule, DayOfMonth, MonthlyMode, Ordinal, Pattern, RecurrenceRule, Termination, Unit,
};
pub use weekday::{Weekday, WeekdaySet};
