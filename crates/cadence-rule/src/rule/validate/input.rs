//! Raw recurrence editor fields, as received over JSON.
//!
//! Everything here is deliberately loose: numbers are `i64` and
//! discriminators are strings, so that out-of-range values reach the
//! validator and are reported field by field instead of failing
//! deserialization as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RuleResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceInput {
    pub interval: i64,
    pub unit: String,
    /// Sunday = 0 .. Saturday = 6.
    #[serde(default)]
    pub weekdays: Option<Vec<i64>>,
    #[serde(default)]
    pub monthly_mode: Option<MonthlyModeInput>,
    #[serde(default)]
    pub termination: Option<TerminationInput>,
    pub anchor: NaiveDate,
}

impl RecurrenceInput {
    /// ## Summary
    /// Deserializes the editor's JSON record.
    ///
    /// ## Errors
    /// Returns `RuleError::ParseError` if the body is not a recurrence record.
    pub fn from_json(body: &str) -> RuleResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyModeInput {
    /// `dayOfMonth` or `ordinalWeekday`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub ordinal: Option<OrdinalInput>,
    #[serde(default)]
    pub weekday: Option<i64>,
}

/// `1`..`4` or `"last"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrdinalInput {
    Number(i64),
    Name(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationInput {
    /// `never`, `onDate` or `afterCount`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub count: Option<i64>,
}
