//! Resolution of "the Nth weekday of a month".

use chrono::{Datelike, Days, NaiveDate};

use crate::rule::core::{Ordinal, Weekday};

/// ## Summary
/// Resolves `ordinal` `weekday` of `month` in `year` to a concrete date.
///
/// Numbered ordinals return `None` when the month has fewer matching
/// weekdays; callers skip such months rather than clamping. `Last` always
/// resolves for a valid month, since every weekday occurs at least four
/// times in any month.
///
/// Returns `None` for a month outside 1..=12 or a year outside the supported
/// calendar range.
#[must_use]
pub fn resolve(year: i32, month: u32, ordinal: Ordinal, weekday: Weekday) -> Option<NaiveDate> {
    match ordinal.number() {
        Some(n) => NaiveDate::from_weekday_of_month_opt(year, month, weekday.to_chrono(), n),
        None => last_weekday_of_month(year, month, weekday),
    }
}

/// Returns the last day of `month` in `year`.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    (28..=31)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let back = (7 + last.weekday().num_days_from_sunday() - u32::from(weekday.index())) % 7;
    last.checked_sub_days(Days::new(u64::from(back)))
}
