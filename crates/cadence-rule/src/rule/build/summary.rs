//! English rule summaries, e.g. "Every 2 weeks on Sunday, Monday, 4 times".

use crate::rule::core::{MonthlyMode, Pattern, RecurrenceRule, Termination, Unit};

impl RecurrenceRule {
    /// Describes the rule in one line of English.
    #[must_use]
    pub fn summary(&self) -> String {
        let interval = self.interval().get();
        let mut out = if interval == 1 {
            match self.unit() {
                Unit::Day => "Daily",
                Unit::Week => "Weekly",
                Unit::Month => "Monthly",
                Unit::Year => "Yearly",
            }
            .to_string()
        } else {
            format!("Every {interval} {}s", self.unit())
        };

        match self.pattern() {
            Pattern::Weekly(days) => {
                let names: Vec<_> = days.iter().map(|day| day.name()).collect();
                out.push_str(" on ");
                out.push_str(&names.join(", "));
            }
            Pattern::Monthly(MonthlyMode::DayOfMonth(day)) => {
                out.push_str(&format!(" on day {}", day.get()));
            }
            Pattern::Monthly(MonthlyMode::OrdinalWeekday { ordinal, weekday }) => {
                out.push_str(&format!(" on the {} {}", ordinal.name(), weekday.name()));
            }
            Pattern::Daily | Pattern::Yearly => {}
        }

        match self.termination() {
            Termination::Never => {}
            Termination::OnDate(date) => out.push_str(&format!(", until {date}")),
            Termination::AfterCount(count) if count.get() == 1 => out.push_str(", once"),
            Termination::AfterCount(count) => out.push_str(&format!(", {count} times")),
        }

        out
    }
}
