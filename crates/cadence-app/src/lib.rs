//! HTTP surface for recurrence rules: validation, RRULE export and
//! occurrence expansion over JSON.

pub mod app;
pub mod config;
pub mod error;
