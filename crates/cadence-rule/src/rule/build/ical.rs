//! RFC 5545 RRULE export (§3.3.10, §3.8.5.3).
//!
//! RFC 5545 ignores recurrence instances whose date does not exist (day 31 of
//! a 30-day month, February 29 of a common year), which is the same skip
//! policy the generator applies, so an exported rule expands to the same
//! dates under any compliant engine.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{RuleError, RuleResult};
use crate::rule::core::{AnchoredRule, MonthlyMode, Pattern, RecurrenceRule, Termination};

/// How an `UNTIL` bound is written.
///
/// RFC 5545 requires `UNTIL` to have the same value type as `DTSTART`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UntilForm {
    /// `UNTIL=20260630`, for a date-valued `DTSTART`.
    Date,
    /// `UNTIL=20260630T000000Z`, for a `DTSTART` at UTC midnight.
    UtcMidnight,
}

impl UntilForm {
    fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Date => date.format("%Y%m%d").to_string(),
            Self::UtcMidnight => date.format("%Y%m%dT000000Z").to_string(),
        }
    }
}

impl RecurrenceRule {
    /// ## Summary
    /// Renders the rule as an RRULE value, e.g.
    /// `FREQ=WEEKLY;INTERVAL=2;COUNT=4;WKST=SU;BYDAY=SU,MO`.
    ///
    /// Weekly rules always carry `WKST=SU`: weeks start on Sunday, and with an
    /// interval above one the week start decides which days share a cycle.
    #[must_use]
    pub fn to_rrule(&self, until: UntilForm) -> String {
        let mut parts = Vec::new();

        let freq = match self.pattern() {
            Pattern::Daily => "DAILY",
            Pattern::Weekly(_) => "WEEKLY",
            Pattern::Monthly(_) => "MONTHLY",
            Pattern::Yearly => "YEARLY",
        };
        parts.push(format!("FREQ={freq}"));

        let interval = self.interval().get();
        if interval != 1 {
            parts.push(format!("INTERVAL={interval}"));
        }

        match self.termination() {
            Termination::Never => {}
            Termination::OnDate(date) => parts.push(format!("UNTIL={}", until.format(date))),
            Termination::AfterCount(count) => parts.push(format!("COUNT={count}")),
        }

        match self.pattern() {
            Pattern::Weekly(days) => {
                parts.push("WKST=SU".to_string());
                let s: Vec<_> = days.iter().map(|day| day.as_str()).collect();
                parts.push(format!("BYDAY={}", s.join(",")));
            }
            Pattern::Monthly(MonthlyMode::DayOfMonth(day)) => {
                parts.push(format!("BYMONTHDAY={}", day.get()));
            }
            Pattern::Monthly(MonthlyMode::OrdinalWeekday { ordinal, weekday }) => {
                parts.push(format!("BYDAY={}{weekday}", ordinal.as_byday_prefix()));
            }
            // Month and day come from DTSTART.
            Pattern::Daily | Pattern::Yearly => {}
        }

        parts.join(";")
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rrule(UntilForm::Date))
    }
}

impl AnchoredRule {
    /// ## Summary
    /// Renders `DTSTART` and `RRULE` content lines for the anchored rule.
    ///
    /// Dates carry no time of day, so `DTSTART` is written as UTC midnight of
    /// the anchor and `UNTIL` matches it.
    #[must_use]
    pub fn to_rrule_set_text(&self) -> String {
        format!(
            "DTSTART:{}\nRRULE:{}",
            UntilForm::UtcMidnight.format(self.anchor()),
            self.rule().to_rrule(UntilForm::UtcMidnight)
        )
    }

    /// ## Summary
    /// Builds an `rrule` crate set equivalent to this rule, for consumers that
    /// schedule from RFC 5545 recurrence sets.
    ///
    /// ## Errors
    /// Returns `RuleError::RRuleError` if the `rrule` crate rejects the rule.
    pub fn to_rrule_set(&self) -> RuleResult<::rrule::RRuleSet> {
        let text = self.to_rrule_set_text();
        tracing::trace!(rrule_set = %text, "Building RRULE set");
        text.parse::<::rrule::RRuleSet>()
            .map_err(|err| RuleError::RRuleError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::rule::core::{DayOfMonth, Ordinal, Weekday, WeekdaySet};

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).expect("non-zero")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn rrule_display_daily() {
        let rule = RecurrenceRule::every(nz(1), Pattern::Daily);
        assert_eq!(rule.to_string(), "FREQ=DAILY");
    }

    #[test]
    fn rrule_display_weekly_byday() {
        let days = WeekdaySet::new([Weekday::Monday, Weekday::Sunday]).expect("non-empty");
        let rule = RecurrenceRule::every(nz(2), Pattern::Weekly(days)).count(nz(4));
        assert_eq!(
            rule.to_string(),
            "FREQ=WEEKLY;INTERVAL=2;COUNT=4;WKST=SU;BYDAY=SU,MO"
        );
    }

    #[test]
    fn rrule_display_monthly_day() {
        let rule = RecurrenceRule::every(
            nz(1),
            Pattern::Monthly(MonthlyMode::DayOfMonth(DayOfMonth::new(31).expect("valid"))),
        )
        .until(date(2026, 12, 31));
        assert_eq!(rule.to_string(), "FREQ=MONTHLY;UNTIL=20261231;BYMONTHDAY=31");
    }

    #[test]
    fn rrule_display_monthly_nth() {
        let last_friday = RecurrenceRule::every(
            nz(1),
            Pattern::Monthly(MonthlyMode::OrdinalWeekday {
                ordinal: Ordinal::Last,
                weekday: Weekday::Friday,
            }),
        );
        assert_eq!(last_friday.to_string(), "FREQ=MONTHLY;BYDAY=-1FR");

        let second_tuesday = RecurrenceRule::every(
            nz(3),
            Pattern::Monthly(MonthlyMode::OrdinalWeekday {
                ordinal: Ordinal::Second,
                weekday: Weekday::Tuesday,
            }),
        );
        assert_eq!(second_tuesday.to_string(), "FREQ=MONTHLY;INTERVAL=3;BYDAY=2TU");
    }

    #[test]
    fn rrule_set_text_uses_utc_midnight() {
        let rule = RecurrenceRule::every(nz(1), Pattern::Yearly).until(date(2030, 2, 28));
        let anchored = AnchoredRule::new(rule, date(2024, 2, 29)).expect("valid");
        assert_eq!(
            anchored.to_rrule_set_text(),
            "DTSTART:20240229T000000Z\nRRULE:FREQ=YEARLY;UNTIL=20300228T000000Z"
        );
    }
}
