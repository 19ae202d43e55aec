//! ## Summary
//! Normalization of raw recurrence editor fields into an [`AnchoredRule`].
//!
//! Validation recomputes the whole rule from the raw record every time and
//! reports every violated constraint at once. Nothing is coerced: a missing
//! or contradictory field is an error, never a silent default.

use std::num::NonZeroU32;

use chrono::NaiveDate;

use super::input::{MonthlyModeInput, OrdinalInput, RecurrenceInput, TerminationInput};
use crate::error::{ValidationError, ValidationErrors};
use crate::rule::core::{
    AnchoredRule, DayOfMonth, MonthlyMode, Ordinal, Pattern, RecurrenceRule, Termination, Unit,
    Weekday, WeekdaySet, check_end_date,
};

const KIND_DAY_OF_MONTH: &str = "dayOfMonth";
const KIND_ORDINAL_WEEKDAY: &str = "ordinalWeekday";
const KIND_NEVER: &str = "never";
const KIND_ON_DATE: &str = "onDate";
const KIND_AFTER_COUNT: &str = "afterCount";

/// ## Summary
/// Validates a raw recurrence record and builds the rule it describes,
/// bound to the record's anchor date.
///
/// Weekdays are only read for weekly rules and the monthly mode only for
/// monthly rules; the editor keeps both populated regardless of the unit.
///
/// ## Errors
/// Returns every violated constraint as a `{field, message}` pair.
///
/// ## Side Effects
/// None.
pub fn validate(input: &RecurrenceInput) -> Result<AnchoredRule, ValidationErrors> {
    let mut errors = Vec::new();

    let interval = check_interval(input.interval, &mut errors);
    let pattern = check_pattern(input, &mut errors);
    let termination = check_termination(input.termination.as_ref(), input.anchor, &mut errors);

    match (interval, pattern, termination) {
        (Some(interval), Some(pattern), Some(termination)) if errors.is_empty() => {
            let rule = RecurrenceRule::new(interval, pattern, termination);
            tracing::debug!(rule = %rule, anchor = %input.anchor, "Recurrence rule accepted");
            Ok(AnchoredRule::new_checked(rule, input.anchor))
        }
        _ => {
            tracing::debug!(error_count = errors.len(), "Recurrence rule rejected");
            Err(ValidationErrors::new(errors))
        }
    }
}

fn check_interval(interval: i64, errors: &mut Vec<ValidationError>) -> Option<NonZeroU32> {
    if interval < 1 {
        errors.push(ValidationError::new("interval", "must be at least 1"));
        return None;
    }
    let interval = u32::try_from(interval)
        .ok()
        .and_then(NonZeroU32::new);
    if interval.is_none() {
        errors.push(ValidationError::new(
            "interval",
            format!("must be at most {}", u32::MAX),
        ));
    }
    interval
}

fn check_pattern(input: &RecurrenceInput, errors: &mut Vec<ValidationError>) -> Option<Pattern> {
    let Some(unit) = Unit::parse(&input.unit) else {
        errors.push(ValidationError::new(
            "unit",
            format!(
                "unknown unit \"{}\", expected one of day, week, month, year",
                input.unit
            ),
        ));
        return None;
    };

    match unit {
        Unit::Day => Some(Pattern::Daily),
        Unit::Week => check_weekdays(input.weekdays.as_deref(), errors).map(Pattern::Weekly),
        Unit::Month => check_monthly_mode(input.monthly_mode.as_ref(), errors).map(Pattern::Monthly),
        Unit::Year => Some(Pattern::Yearly),
    }
}

fn check_weekdays(
    weekdays: Option<&[i64]>,
    errors: &mut Vec<ValidationError>,
) -> Option<WeekdaySet> {
    let raw = weekdays.unwrap_or_default();
    if raw.is_empty() {
        errors.push(ValidationError::new(
            "weekdays",
            "at least one weekday is required for weekly rules",
        ));
        return None;
    }

    let mut days = Vec::with_capacity(raw.len());
    let mut valid = true;
    for (idx, value) in raw.iter().enumerate() {
        match weekday_from_number(*value) {
            Some(day) => days.push(day),
            None => {
                valid = false;
                errors.push(ValidationError::new(
                    format!("weekdays[{idx}]"),
                    weekday_range_message(*value),
                ));
            }
        }
    }

    if valid { WeekdaySet::new(days) } else { None }
}

fn check_monthly_mode(
    mode: Option<&MonthlyModeInput>,
    errors: &mut Vec<ValidationError>,
) -> Option<MonthlyMode> {
    let Some(mode) = mode else {
        errors.push(ValidationError::new(
            "monthlyMode",
            "required for monthly rules",
        ));
        return None;
    };

    let day_populated = mode.day.is_some();
    let ordinal_populated = mode.ordinal.is_some() || mode.weekday.is_some();

    let ordinal_mode = match (day_populated, ordinal_populated) {
        (true, false) => false,
        (false, true) => true,
        (true, true) => {
            errors.push(ValidationError::new(
                "monthlyMode",
                "populate either day or ordinal/weekday, not both",
            ));
            return None;
        }
        (false, false) => {
            errors.push(ValidationError::new(
                "monthlyMode",
                "either day or ordinal and weekday must be populated",
            ));
            return None;
        }
    };

    if let Some(kind) = mode.kind.as_deref() {
        let expected = if ordinal_mode {
            KIND_ORDINAL_WEEKDAY
        } else {
            KIND_DAY_OF_MONTH
        };
        if kind != KIND_DAY_OF_MONTH && kind != KIND_ORDINAL_WEEKDAY {
            errors.push(ValidationError::new(
                "monthlyMode.kind",
                format!("unknown kind \"{kind}\", expected {KIND_DAY_OF_MONTH} or {KIND_ORDINAL_WEEKDAY}"),
            ));
            return None;
        }
        if kind != expected {
            errors.push(ValidationError::new(
                "monthlyMode.kind",
                format!("kind \"{kind}\" does not match the populated fields ({expected})"),
            ));
            return None;
        }
    }

    if ordinal_mode {
        check_ordinal_weekday(mode, errors)
    } else {
        check_day_of_month(mode.day, errors)
    }
}

fn check_day_of_month(
    day: Option<i64>,
    errors: &mut Vec<ValidationError>,
) -> Option<MonthlyMode> {
    let day = day?;
    let parsed = u32::try_from(day).ok().and_then(DayOfMonth::new);
    if parsed.is_none() {
        errors.push(ValidationError::new(
            "monthlyMode.day",
            format!("day {day} is out of range, expected 1 to 31"),
        ));
    }
    parsed.map(MonthlyMode::DayOfMonth)
}

fn check_ordinal_weekday(
    mode: &MonthlyModeInput,
    errors: &mut Vec<ValidationError>,
) -> Option<MonthlyMode> {
    let ordinal = match &mode.ordinal {
        None => {
            errors.push(ValidationError::new("monthlyMode.ordinal", "required"));
            None
        }
        Some(raw) => {
            let ordinal = parse_ordinal(raw);
            if ordinal.is_none() {
                errors.push(ValidationError::new(
                    "monthlyMode.ordinal",
                    "must be 1, 2, 3, 4 or \"last\"",
                ));
            }
            ordinal
        }
    };

    let weekday = match mode.weekday {
        None => {
            errors.push(ValidationError::new("monthlyMode.weekday", "required"));
            None
        }
        Some(value) => {
            let weekday = weekday_from_number(value);
            if weekday.is_none() {
                errors.push(ValidationError::new(
                    "monthlyMode.weekday",
                    weekday_range_message(value),
                ));
            }
            weekday
        }
    };

    Some(MonthlyMode::OrdinalWeekday {
        ordinal: ordinal?,
        weekday: weekday?,
    })
}

fn parse_ordinal(raw: &OrdinalInput) -> Option<Ordinal> {
    match raw {
        OrdinalInput::Number(n) => Ordinal::from_number(*n),
        OrdinalInput::Name(name) if name.eq_ignore_ascii_case("last") => Some(Ordinal::Last),
        OrdinalInput::Name(name) => name.parse::<i64>().ok().and_then(Ordinal::from_number),
    }
}

fn check_termination(
    termination: Option<&TerminationInput>,
    anchor: NaiveDate,
    errors: &mut Vec<ValidationError>,
) -> Option<Termination> {
    let Some(termination) = termination else {
        errors.push(ValidationError::new("termination", "required"));
        return None;
    };
    let Some(kind) = termination.kind.as_deref() else {
        errors.push(ValidationError::new(
            "termination.kind",
            format!("required, expected {KIND_NEVER}, {KIND_ON_DATE} or {KIND_AFTER_COUNT}"),
        ));
        return None;
    };

    let before = errors.len();
    let resolved = match kind {
        KIND_NEVER => {
            reject_populated(termination.date.is_some(), "termination.date", kind, errors);
            reject_populated(termination.count.is_some(), "termination.count", kind, errors);
            Some(Termination::Never)
        }
        KIND_ON_DATE => {
            reject_populated(termination.count.is_some(), "termination.count", kind, errors);
            if termination.date.is_none() {
                errors.push(ValidationError::new("termination.date", "required"));
            }
            termination.date.map(Termination::OnDate)
        }
        KIND_AFTER_COUNT => {
            reject_populated(termination.date.is_some(), "termination.date", kind, errors);
            check_count(termination.count, errors).map(Termination::AfterCount)
        }
        other => {
            errors.push(ValidationError::new(
                "termination.kind",
                format!(
                    "unknown kind \"{other}\", expected {KIND_NEVER}, {KIND_ON_DATE} or {KIND_AFTER_COUNT}"
                ),
            ));
            None
        }
    };

    let resolved = resolved?;
    if let Some(err) = check_end_date(resolved, anchor) {
        errors.push(err);
    }
    (errors.len() == before).then_some(resolved)
}

fn check_count(count: Option<i64>, errors: &mut Vec<ValidationError>) -> Option<NonZeroU32> {
    let Some(count) = count else {
        errors.push(ValidationError::new("termination.count", "required"));
        return None;
    };
    if count < 1 {
        errors.push(ValidationError::new("termination.count", "must be at least 1"));
        return None;
    }
    let parsed = u32::try_from(count).ok().and_then(NonZeroU32::new);
    if parsed.is_none() {
        errors.push(ValidationError::new(
            "termination.count",
            format!("must be at most {}", u32::MAX),
        ));
    }
    parsed
}

fn reject_populated(
    populated: bool,
    field: &'static str,
    kind: &str,
    errors: &mut Vec<ValidationError>,
) {
    if populated {
        errors.push(ValidationError::new(
            field,
            format!("must be empty when termination kind is {kind}"),
        ));
    }
}

fn weekday_from_number(value: i64) -> Option<Weekday> {
    u8::try_from(value).ok().and_then(Weekday::from_index)
}

fn weekday_range_message(value: i64) -> String {
    format!("weekday {value} is out of range, expected 0 (Sunday) to 6 (Saturday)")
}
