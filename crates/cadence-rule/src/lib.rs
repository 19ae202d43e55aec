//! Recurrence rules for scheduled work: data model, validation, occurrence
//! generation and RFC 5545 export.
//!
//! ## Example
//!
//! ```rust
//! use cadence_rule::rule::validate::{RecurrenceInput, validate};
//!
//! let input = RecurrenceInput::from_json(
//!     r#"{
//!         "interval": 2,
//!         "unit": "week",
//!         "weekdays": [0, 1],
//!         "termination": { "kind": "afterCount", "count": 4 },
//!         "anchor": "2026-01-05"
//!     }"#,
//! )
//! .unwrap();
//! let schedule = validate(&input).unwrap();
//! let dates: Vec<String> = schedule
//!     .occurrences(10)
//!     .map(|date| date.to_string())
//!     .collect();
//!
//! assert_eq!(dates, ["2026-01-05", "2026-01-18", "2026-01-19", "2026-02-01"]);
//! ```

pub mod error;
pub mod rule;
