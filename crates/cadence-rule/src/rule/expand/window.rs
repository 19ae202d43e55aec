//! Windowed expansion.

use chrono::NaiveDate;

use super::generate;
use crate::rule::core::RecurrenceRule;

/// Options for recurrence expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to return.
    pub cap: usize,

    /// Start of the date window (inclusive).
    pub range_start: Option<NaiveDate>,

    /// End of the date window (exclusive).
    pub range_end: Option<NaiveDate>,
}

impl ExpansionOptions {
    /// Creates options returning at most `cap` occurrences, unwindowed.
    #[must_use]
    pub const fn new(cap: usize) -> Self {
        Self {
            cap,
            range_start: None,
            range_end: None,
        }
    }

    /// Restricts expansion to `[start, end)`.
    #[must_use]
    pub const fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range_start = Some(start);
        self.range_end = Some(end);
        self
    }

    #[must_use]
    pub const fn with_range_start(mut self, start: NaiveDate) -> Self {
        self.range_start = Some(start);
        self
    }

    #[must_use]
    pub const fn with_range_end(mut self, end: NaiveDate) -> Self {
        self.range_end = Some(end);
        self
    }
}

/// ## Summary
/// Collects the occurrences of `rule` that fall inside the window of `options`.
///
/// Occurrences before the window still count towards an `AfterCount`
/// termination, so a window never reveals dates past the end of the series.
/// At most `options.cap` dates are returned. Reaching a distant
/// `range_start` jumps over whole cycles, except for count-terminated
/// series, which are walked from the anchor and so bounded by their count.
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
#[must_use]
pub fn expand(rule: &RecurrenceRule, anchor: NaiveDate, options: &ExpansionOptions) -> Vec<NaiveDate> {
    if options.cap == 0 {
        return Vec::new();
    }

    let mut occurrences = generate(rule, anchor, usize::MAX);
    if let Some(start) = options.range_start {
        occurrences.advance_to(start);
    }

    let dates: Vec<NaiveDate> = occurrences
        .skip_while(|date| options.range_start.is_some_and(|start| *date < start))
        .take_while(|date| options.range_end.is_none_or(|end| *date < end))
        .take(options.cap)
        .collect();

    tracing::debug!(
        anchor = %anchor,
        count = dates.len(),
        cap = options.cap,
        "Expanded recurrence window"
    );
    dates
}
