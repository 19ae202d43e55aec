//! Tests for recurrence rules, end to end from raw input to dates.

use chrono::{Datelike, NaiveDate};

use super::*;

mod rule_cases_data {
    include!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/rule_cases_data/mod.rs"
    ));
}

use rule_cases_data::{assert_case, rule_cases};

fn anchored(json: &str) -> AnchoredRule {
    let input = RecurrenceInput::from_json(json).expect("input should parse");
    validate(&input).expect("input should validate")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A spread of rules covering every unit and termination.
fn sample_rules() -> Vec<AnchoredRule> {
    [
        r#"{"interval":1,"unit":"day","termination":{"kind":"never"},"anchor":"2026-01-05"}"#,
        r#"{"interval":3,"unit":"day","termination":{"kind":"afterCount","count":20},"anchor":"2026-02-27"}"#,
        r#"{"interval":1,"unit":"week","weekdays":[6,0,3],"termination":{"kind":"never"},"anchor":"2026-01-07"}"#,
        r#"{"interval":3,"unit":"week","weekdays":[2,4],"termination":{"kind":"onDate","date":"2026-09-01"},"anchor":"2026-01-01"}"#,
        r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"dayOfMonth","day":31},"termination":{"kind":"never"},"anchor":"2026-01-31"}"#,
        r#"{"interval":2,"unit":"month","monthlyMode":{"kind":"ordinalWeekday","ordinal":"last","weekday":5},"termination":{"kind":"afterCount","count":12},"anchor":"2026-01-01"}"#,
        r#"{"interval":3,"unit":"month","monthlyMode":{"kind":"ordinalWeekday","ordinal":4,"weekday":4},"termination":{"kind":"never"},"anchor":"2026-01-22"}"#,
        r#"{"interval":1,"unit":"year","termination":{"kind":"never"},"anchor":"2024-02-29"}"#,
    ]
    .into_iter()
    .map(anchored)
    .collect()
}

#[test_log::test]
fn rule_cases_produce_expected_dates() {
    for case in rule_cases() {
        let schedule = anchored(case.input);
        let actual: Vec<NaiveDate> = schedule.occurrences(case.cap).collect();
        assert_case(&case, &actual);
    }
}

#[test_log::test]
fn rule_cases_match_rrule_crate() {
    for case in rule_cases() {
        let schedule = anchored(case.input);
        let ours: Vec<NaiveDate> = schedule.occurrences(case.cap).collect();

        let limit = u16::try_from(case.cap).expect("case cap fits u16");
        let theirs: Vec<NaiveDate> = schedule
            .to_rrule_set()
            .expect("rrule set should build")
            .all(limit)
            .dates
            .into_iter()
            .map(|dt| dt.date_naive())
            .collect();

        assert_eq!(ours, theirs, "Case {} disagrees with rrule", case.name);
    }
}

#[test]
fn occurrences_are_strictly_increasing() {
    for schedule in sample_rules() {
        let dates: Vec<NaiveDate> = schedule.occurrences(200).collect();
        assert!(!dates.is_empty(), "{} produced nothing", schedule.rule());
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{} not increasing at {:?}", schedule.rule(), pair);
        }
        assert!(dates[0] >= schedule.anchor());
    }
}

#[test]
fn weekly_dates_fall_on_selected_days() {
    for schedule in sample_rules() {
        let Some(days) = schedule.rule().weekdays() else {
            continue;
        };
        for occurrence in schedule.occurrences(200) {
            assert!(
                days.contains(occurrence.weekday().into()),
                "{occurrence} is not one of {days:?}"
            );
        }
    }
}

#[test]
fn count_termination_is_exact() {
    for schedule in sample_rules() {
        if let Termination::AfterCount(count) = schedule.rule().termination() {
            let expected = usize::try_from(count.get()).expect("count fits usize");
            assert_eq!(schedule.occurrences(10_000).count(), expected);
        }
    }
}

#[test]
fn date_termination_is_inclusive_upper_bound() {
    for schedule in sample_rules() {
        if let Termination::OnDate(end) = schedule.rule().termination() {
            let dates: Vec<NaiveDate> = schedule.occurrences(10_000).collect();
            assert!(dates.iter().all(|d| *d <= end));
            // The next step past the last date would be beyond the end.
            assert!(dates.len() < 10_000);
        }
    }
}

#[test]
fn monthly_day_never_clamps() {
    let schedule = anchored(
        r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"dayOfMonth","day":31},"termination":{"kind":"never"},"anchor":"2026-01-31"}"#,
    );
    for occurrence in schedule.occurrences(100) {
        assert_eq!(occurrence.day(), 31);
    }
}

#[test]
fn yearly_leap_day_lands_only_in_leap_years() {
    let schedule = anchored(
        r#"{"interval":1,"unit":"year","termination":{"kind":"never"},"anchor":"2024-02-29"}"#,
    );
    let years: Vec<i32> = schedule.occurrences(5).map(|d| d.year()).collect();
    assert_eq!(years, vec![2024, 2028, 2032, 2036, 2040]);
}

#[test]
fn anchor_counts_only_when_it_matches() {
    // Anchor on a Thursday, rule on Mondays.
    let schedule = anchored(
        r#"{"interval":1,"unit":"week","weekdays":[1],"termination":{"kind":"afterCount","count":2},"anchor":"2026-01-01"}"#,
    );
    let dates: Vec<NaiveDate> = schedule.occurrences(10).collect();
    assert_eq!(dates, vec![date(2026, 1, 5), date(2026, 1, 12)]);
}

#[test]
fn expansion_window_is_half_open() {
    let schedule = anchored(
        r#"{"interval":1,"unit":"day","termination":{"kind":"never"},"anchor":"2026-01-01"}"#,
    );
    let options = ExpansionOptions::new(100).with_range(date(2026, 3, 1), date(2026, 3, 4));
    assert_eq!(
        schedule.expand(&options),
        vec![date(2026, 3, 1), date(2026, 3, 2), date(2026, 3, 3)]
    );
}

#[test]
fn exported_rrule_round_trips_through_display() {
    let schedule = anchored(
        r#"{"interval":2,"unit":"week","weekdays":[0,1],"termination":{"kind":"afterCount","count":4},"anchor":"2026-01-05"}"#,
    );
    assert_eq!(
        schedule.rule().to_string(),
        "FREQ=WEEKLY;INTERVAL=2;COUNT=4;WKST=SU;BYDAY=SU,MO"
    );
    assert_eq!(
        schedule.rule().summary(),
        "Every 2 weeks on Sunday, Monday, 4 times"
    );
}
