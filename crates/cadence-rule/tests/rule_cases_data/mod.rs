use chrono::NaiveDate;

pub struct RuleCase {
    pub name: &'static str,
    pub input: &'static str,
    pub cap: usize,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_basic",
            input: r#"{"interval":1,"unit":"day","termination":{"kind":"afterCount","count":3},"anchor":"2026-01-30"}"#,
            cap: 100,
            expected: Some(&["2026-01-30", "2026-01-31", "2026-02-01"]),
            expected_len: None,
        },
        RuleCase {
            name: "weekly_biweekly_sunday_monday",
            input: r#"{"interval":2,"unit":"week","weekdays":[0,1],"termination":{"kind":"afterCount","count":4},"anchor":"2026-01-05"}"#,
            cap: 100,
            expected: Some(&["2026-01-05", "2026-01-18", "2026-01-19", "2026-02-01"]),
            expected_len: None,
        },
        RuleCase {
            name: "weekly_workdays",
            input: r#"{"interval":1,"unit":"week","weekdays":[1,2,3,4,5],"termination":{"kind":"afterCount","count":6},"anchor":"2026-01-09"}"#,
            cap: 100,
            expected: Some(&[
                "2026-01-09",
                "2026-01-12",
                "2026-01-13",
                "2026-01-14",
                "2026-01-15",
                "2026-01-16",
            ]),
            expected_len: None,
        },
        RuleCase {
            name: "weekly_until_mid_week",
            input: r#"{"interval":1,"unit":"week","weekdays":[3],"termination":{"kind":"onDate","date":"2026-01-20"},"anchor":"2026-01-01"}"#,
            cap: 100,
            expected: Some(&["2026-01-07", "2026-01-14"]),
            expected_len: None,
        },
        RuleCase {
            name: "monthly_day_31_non_clamping",
            input: r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"dayOfMonth","day":31},"termination":{"kind":"never"},"anchor":"2024-01-31"}"#,
            cap: 3,
            expected: Some(&["2024-01-31", "2024-03-31", "2024-05-31"]),
            expected_len: None,
        },
        RuleCase {
            name: "monthly_day_30_skips_february",
            input: r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"dayOfMonth","day":30},"termination":{"kind":"afterCount","count":3},"anchor":"2026-01-30"}"#,
            cap: 100,
            expected: Some(&["2026-01-30", "2026-03-30", "2026-04-30"]),
            expected_len: None,
        },
        RuleCase {
            name: "monthly_second_tuesday",
            input: r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"ordinalWeekday","ordinal":2,"weekday":2},"termination":{"kind":"afterCount","count":3},"anchor":"2026-01-01"}"#,
            cap: 100,
            expected: Some(&["2026-01-13", "2026-02-10", "2026-03-10"]),
            expected_len: None,
        },
        RuleCase {
            name: "monthly_last_sunday",
            input: r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"ordinalWeekday","ordinal":"last","weekday":0},"termination":{"kind":"afterCount","count":2},"anchor":"2026-01-01"}"#,
            cap: 100,
            expected: Some(&["2026-01-25", "2026-02-22"]),
            expected_len: None,
        },
        RuleCase {
            name: "monthly_until_inclusive",
            input: r#"{"interval":1,"unit":"month","monthlyMode":{"kind":"dayOfMonth","day":15},"termination":{"kind":"onDate","date":"2026-03-15"},"anchor":"2026-01-15"}"#,
            cap: 100,
            expected: Some(&["2026-01-15", "2026-02-15", "2026-03-15"]),
            expected_len: None,
        },
        RuleCase {
            name: "yearly_leap_day",
            input: r#"{"interval":1,"unit":"year","termination":{"kind":"afterCount","count":3},"anchor":"2024-02-29"}"#,
            cap: 100,
            expected: Some(&["2024-02-29", "2028-02-29", "2032-02-29"]),
            expected_len: None,
        },
        RuleCase {
            name: "yearly_every_two_until",
            input: r#"{"interval":2,"unit":"year","termination":{"kind":"onDate","date":"2030-12-31"},"anchor":"2026-07-04"}"#,
            cap: 100,
            expected: Some(&["2026-07-04", "2028-07-04", "2030-07-04"]),
            expected_len: None,
        },
        RuleCase {
            name: "daily_never_capped",
            input: r#"{"interval":7,"unit":"day","termination":{"kind":"never"},"anchor":"2026-01-01"}"#,
            cap: 50,
            expected: None,
            expected_len: Some(50),
        },
    ]
}

pub fn assert_case(case: &RuleCase, actual: &[NaiveDate]) {
    if let Some(expected) = case.expected {
        let expected_dates: Vec<NaiveDate> = expected
            .iter()
            .map(|value| parse_date(value))
            .collect();
        assert_eq!(actual, expected_dates.as_slice(), "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date value {value}: {err}"))
}
