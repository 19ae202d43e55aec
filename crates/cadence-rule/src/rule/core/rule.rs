//! Recurrence rule value types.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;

use super::{Weekday, WeekdaySet};
use crate::error::{ValidationError, ValidationErrors};
use crate::rule::expand::{ExpansionOptions, Occurrences, expand, generate};

/// Repetition unit: "every N <unit>s".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Returns the string representation used in the JSON contract.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parses a unit from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "day" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => return None,
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which occurrence of a weekday within a month.
///
/// A fifth occurrence is deliberately not representable: most months do not
/// have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// Maps 1..=4 to the numbered ordinals.
    #[must_use]
    pub const fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => Self::First,
            2 => Self::Second,
            3 => Self::Third,
            4 => Self::Fourth,
            _ => return None,
        })
    }

    /// Returns 1..=4, or `None` for `Last`.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }

    /// Returns the BYDAY prefix (RFC 5545 §3.3.10): `1`..`4`, or `-1` for `Last`.
    #[must_use]
    pub const fn as_byday_prefix(self) -> i8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

/// Day of the month, 1..=31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    #[must_use]
    pub fn new(day: u32) -> Option<Self> {
        u8::try_from(day)
            .ok()
            .filter(|day| (1..=31).contains(day))
            .map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

/// How a monthly rule picks its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyMode {
    /// Fixed day of the month; months that are too short are skipped.
    DayOfMonth(DayOfMonth),
    /// "The second Tuesday", "the last Friday"; months without it are skipped.
    OrdinalWeekday { ordinal: Ordinal, weekday: Weekday },
}

/// The unit together with its unit-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Daily,
    Weekly(WeekdaySet),
    Monthly(MonthlyMode),
    /// Same month and day as the anchor.
    Yearly,
}

impl Pattern {
    #[must_use]
    pub const fn unit(&self) -> Unit {
        match self {
            Self::Daily => Unit::Day,
            Self::Weekly(_) => Unit::Week,
            Self::Monthly(_) => Unit::Month,
            Self::Yearly => Unit::Year,
        }
    }
}

/// When a series stops. Exactly one condition is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    Never,
    /// Inclusive last date.
    OnDate(NaiveDate),
    /// Total number of occurrences.
    AfterCount(NonZeroU32),
}

/// An immutable recurrence rule.
///
/// Invalid combinations (weekdays on a monthly rule, a zero interval, both an
/// end date and a count) cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    interval: NonZeroU32,
    pattern: Pattern,
    termination: Termination,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn new(interval: NonZeroU32, pattern: Pattern, termination: Termination) -> Self {
        Self {
            interval,
            pattern,
            termination,
        }
    }

    /// Creates a rule that repeats every `interval` units and never ends.
    #[must_use]
    pub const fn every(interval: NonZeroU32, pattern: Pattern) -> Self {
        Self::new(interval, pattern, Termination::Never)
    }

    /// Ends the series on `date` (inclusive).
    #[must_use]
    pub const fn until(mut self, date: NaiveDate) -> Self {
        self.termination = Termination::OnDate(date);
        self
    }

    /// Ends the series after `count` occurrences.
    #[must_use]
    pub const fn count(mut self, count: NonZeroU32) -> Self {
        self.termination = Termination::AfterCount(count);
        self
    }

    #[must_use]
    pub const fn interval(&self) -> NonZeroU32 {
        self.interval
    }

    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.pattern.unit()
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Weekdays of a weekly rule.
    #[must_use]
    pub const fn weekdays(&self) -> Option<WeekdaySet> {
        match self.pattern {
            Pattern::Weekly(days) => Some(days),
            _ => None,
        }
    }

    /// Day selection of a monthly rule.
    #[must_use]
    pub const fn monthly_mode(&self) -> Option<MonthlyMode> {
        match self.pattern {
            Pattern::Monthly(mode) => Some(mode),
            _ => None,
        }
    }
}

/// Reports an end date that falls before the anchor.
pub(crate) fn check_end_date(
    termination: Termination,
    anchor: NaiveDate,
) -> Option<ValidationError> {
    match termination {
        Termination::OnDate(end) if end < anchor => Some(ValidationError::new(
            "termination.date",
            format!("end date {end} is earlier than the anchor date {anchor}"),
        )),
        _ => None,
    }
}

/// A rule bound to the date its series starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchoredRule {
    rule: RecurrenceRule,
    anchor: NaiveDate,
}

impl AnchoredRule {
    /// ## Summary
    /// Binds `rule` to `anchor`.
    ///
    /// ## Errors
    /// Returns an error on `termination.date` if the rule ends before the anchor.
    pub fn new(rule: RecurrenceRule, anchor: NaiveDate) -> Result<Self, ValidationErrors> {
        match check_end_date(rule.termination, anchor) {
            Some(err) => Err(ValidationErrors::new(vec![err])),
            None => Ok(Self { rule, anchor }),
        }
    }

    /// Caller must have run [`check_end_date`].
    pub(crate) const fn new_checked(rule: RecurrenceRule, anchor: NaiveDate) -> Self {
        Self { rule, anchor }
    }

    #[must_use]
    pub const fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Lazily yields at most `cap` occurrences.
    #[must_use]
    pub fn occurrences(&self, cap: usize) -> Occurrences {
        generate(&self.rule, self.anchor, cap)
    }

    /// Collects the occurrences inside the window described by `options`.
    #[must_use]
    pub fn expand(&self, options: &ExpansionOptions) -> Vec<NaiveDate> {
        expand(&self.rule, self.anchor, options)
    }
}
