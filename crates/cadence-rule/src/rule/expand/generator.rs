//! Lazy occurrence generation.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate};

use super::ordinal::resolve;
use crate::rule::core::{
    MonthlyMode, Ordinal, Pattern, RecurrenceRule, Termination, Weekday, WeekdaySet,
};

/// Months in one 400-year Gregorian cycle. Month lengths and weekday layout
/// repeat with this period, so a monthly pattern that misses this many
/// consecutive steps can never match again.
const GREGORIAN_CYCLE_MONTHS: u32 = 4800;

/// ## Summary
/// Produces the occurrences of `rule` starting from `anchor`.
///
/// The returned iterator is lazy and yields at most `cap` dates, in strictly
/// increasing order, never earlier than `anchor`. The anchor is the first
/// occurrence only when it matches the rule's pattern.
///
/// Dates that do not exist in a cycle (day 31 of April, February 29 of a
/// common year) are skipped, never clamped.
///
/// ## Side Effects
///
/// None - every call owns its iteration state.
#[must_use]
pub fn generate(rule: &RecurrenceRule, anchor: NaiveDate, cap: usize) -> Occurrences {
    tracing::trace!(
        anchor = %anchor,
        cap,
        unit = %rule.unit(),
        interval = rule.interval().get(),
        "Generating occurrences"
    );

    Occurrences {
        cursor: Cursor::new(rule, anchor),
        anchor,
        termination: rule.termination(),
        remaining: cap,
        emitted: 0,
        done: cap == 0,
    }
}

/// Iterator over the occurrences of an anchored rule.
#[derive(Debug, Clone)]
pub struct Occurrences {
    cursor: Cursor,
    anchor: NaiveDate,
    termination: Termination,
    remaining: usize,
    emitted: u32,
    done: bool,
}

impl Occurrences {
    /// Number of occurrences yielded so far.
    #[must_use]
    pub const fn emitted(&self) -> u32 {
        self.emitted
    }

    /// ## Summary
    /// Skips whole cycles that end before `start` without visiting them, so
    /// reaching a distant window costs the same as reaching a near one.
    ///
    /// Has no effect on count-terminated series, whose remaining count
    /// depends on every earlier occurrence. Dates before `start` may still
    /// be yielded from the cycle that contains it.
    pub fn advance_to(&mut self, start: NaiveDate) {
        if matches!(self.termination, Termination::AfterCount(_)) || start <= self.anchor {
            return;
        }
        tracing::trace!(start = %start, "Advancing cursor");
        self.cursor.advance_to(start);
    }

    fn finish(&mut self) -> Option<NaiveDate> {
        self.done = true;
        None
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Termination::AfterCount(count) = self.termination
            && self.emitted >= count.get()
        {
            return self.finish();
        }

        loop {
            let Some(candidate) = self.cursor.next_candidate() else {
                return self.finish();
            };
            if candidate < self.anchor {
                tracing::trace!(candidate = %candidate, "Candidate precedes anchor, skipping");
                continue;
            }
            if let Termination::OnDate(end) = self.termination
                && candidate > end
            {
                return self.finish();
            }

            self.emitted = self.emitted.saturating_add(1);
            self.remaining -= 1;
            if self.remaining == 0 {
                self.done = true;
            }
            return Some(candidate);
        }
    }
}

impl FusedIterator for Occurrences {}

/// Yields the raw pattern dates in increasing order, ignoring the anchor
/// bound and termination.
#[derive(Debug, Clone)]
enum Cursor {
    Daily {
        next: Option<NaiveDate>,
        /// Days per step.
        step: u64,
    },
    Weekly {
        /// Sunday of the current cursor week, as days from the common era.
        /// The anchor's own week may begin before `NaiveDate::MIN`.
        week_start: Option<i64>,
        /// Next weekday index (Sunday = 0) to examine in the current week.
        offset: u8,
        weekdays: WeekdaySet,
        /// Days per step.
        step: i64,
    },
    Monthly {
        /// Months since year 0 (`year * 12 + month - 1`).
        month: Option<i64>,
        step: i64,
        target: MonthTarget,
        misses: u32,
    },
}

#[derive(Debug, Clone, Copy)]
enum MonthTarget {
    Day(u32),
    Ordinal(Ordinal, Weekday),
}

impl Cursor {
    fn new(rule: &RecurrenceRule, anchor: NaiveDate) -> Self {
        let interval = rule.interval().get();
        match rule.pattern() {
            Pattern::Daily => Self::Daily {
                next: Some(anchor),
                step: u64::from(interval),
            },
            Pattern::Weekly(weekdays) => {
                let into_week = i64::from(anchor.weekday().num_days_from_sunday());
                Self::Weekly {
                    week_start: Some(day_number(anchor) - into_week),
                    offset: 0,
                    weekdays,
                    step: i64::from(interval) * 7,
                }
            }
            Pattern::Monthly(mode) => Self::Monthly {
                month: Some(month_index(anchor)),
                step: i64::from(interval),
                target: match mode {
                    MonthlyMode::DayOfMonth(day) => MonthTarget::Day(day.get()),
                    MonthlyMode::OrdinalWeekday { ordinal, weekday } => {
                        MonthTarget::Ordinal(ordinal, weekday)
                    }
                },
                misses: 0,
            },
            // A yearly rule is a monthly rule on the anchor's day, 12 months per step.
            Pattern::Yearly => Self::Monthly {
                month: Some(month_index(anchor)),
                step: i64::from(interval) * 12,
                target: MonthTarget::Day(anchor.day()),
                misses: 0,
            },
        }
    }

    fn next_candidate(&mut self) -> Option<NaiveDate> {
        match self {
            Self::Daily { next, step } => {
                let current = (*next)?;
                *next = current.checked_add_days(Days::new(*step));
                Some(current)
            }
            Self::Weekly {
                week_start,
                offset,
                weekdays,
                step,
            } => loop {
                let start = (*week_start)?;
                while *offset < 7 {
                    let day = *offset;
                    *offset += 1;
                    if !Weekday::from_index(day).is_some_and(|wd| weekdays.contains(wd)) {
                        continue;
                    }
                    let number = start + i64::from(day);
                    if number < day_number(NaiveDate::MIN) {
                        continue;
                    }
                    return from_day_number(number);
                }
                *week_start = start.checked_add(*step);
                *offset = 0;
            },
            Self::Monthly {
                month,
                step,
                target,
                misses,
            } => loop {
                let index = (*month)?;
                *month = index.checked_add(*step);

                let (year, month_of_year) = split_month_index(index)?;
                let found = match *target {
                    MonthTarget::Day(day) => NaiveDate::from_ymd_opt(year, month_of_year, day),
                    MonthTarget::Ordinal(ordinal, weekday) => {
                        resolve(year, month_of_year, ordinal, weekday)
                    }
                };

                if let Some(date) = found {
                    *misses = 0;
                    return Some(date);
                }

                tracing::trace!(year, month = month_of_year, "No matching day, skipping month");
                *misses += 1;
                if *misses >= GREGORIAN_CYCLE_MONTHS {
                    tracing::debug!(
                        misses = *misses,
                        "Pattern cannot match again, ending series"
                    );
                    *month = None;
                    return None;
                }
            },
        }
    }

    /// Moves to the last cycle that starts on or before `start`, in one step.
    /// Never moves backwards.
    fn advance_to(&mut self, start: NaiveDate) {
        match self {
            Self::Daily { next, step } => {
                let Some(current) = *next else {
                    return;
                };
                let Ok(behind) = u64::try_from((start - current).num_days()) else {
                    return;
                };
                // Daily cycles are single days, so land on the first step at or after `start`.
                *next = behind
                    .div_ceil(*step)
                    .checked_mul(*step)
                    .and_then(|days| current.checked_add_days(Days::new(days)));
            }
            Self::Weekly {
                week_start,
                offset,
                step,
                ..
            } => {
                let Some(current) = *week_start else {
                    return;
                };
                let target = day_number(start) - i64::from(start.weekday().num_days_from_sunday());
                let cycles = (target - current) / *step;
                if cycles > 0 {
                    *week_start = cycles
                        .checked_mul(*step)
                        .and_then(|days| current.checked_add(days));
                    *offset = 0;
                }
            }
            Self::Monthly { month, step, .. } => {
                let Some(current) = *month else {
                    return;
                };
                let cycles = (month_index(start) - current) / *step;
                if cycles > 0 {
                    *month = cycles
                        .checked_mul(*step)
                        .and_then(|months| current.checked_add(months));
                }
            }
        }
    }
}

fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

fn from_day_number(number: i64) -> Option<NaiveDate> {
    i32::try_from(number)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Splits a month index into (year, month 1..=12); `None` past the calendar range.
fn split_month_index(index: i64) -> Option<(i32, u32)> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    if year > NaiveDate::MAX.year() || year < NaiveDate::MIN.year() {
        return None;
    }
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}
