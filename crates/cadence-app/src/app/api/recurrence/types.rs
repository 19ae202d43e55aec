//! Request and response bodies for the recurrence endpoints.

use cadence_rule::error::ValidationErrors;
use cadence_rule::rule::{AnchoredRule, RecurrenceInput};
use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body of `POST occurrences`: the editor record plus expansion limits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct OccurrencesRequest {
    #[serde(flatten)]
    pub input: RecurrenceInput,
    /// Mandatory: an absent cap fails deserialization.
    pub cap: usize,
    #[serde(default)]
    pub range_start: Option<NaiveDate>,
    /// Exclusive.
    #[serde(default)]
    pub range_end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(super) struct RuleResponse {
    pub rrule: String,
    pub summary: String,
}

impl From<&AnchoredRule> for RuleResponse {
    fn from(schedule: &AnchoredRule) -> Self {
        Self {
            rrule: schedule.rule().to_string(),
            summary: schedule.rule().summary(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct OccurrencesResponse {
    pub occurrences: Vec<NaiveDate>,
    pub rrule: String,
}

#[derive(Debug, Serialize)]
struct ValidationErrorResponse {
    errors: ValidationErrors,
}

#[derive(Debug, Serialize)]
struct BadRequestResponse {
    error: String,
}

/// ## Summary
/// Reads the request body as JSON.
///
/// ## Side Effects
/// On failure, writes a 400 response and returns `None`.
pub(super) async fn read_json_body<T: DeserializeOwned>(
    req: &mut Request,
    res: &mut Response,
) -> Option<T> {
    let body = match req.payload().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read request body");
            write_bad_request(res, e.to_string());
            return None;
        }
    };

    tracing::debug!(bytes = body.len(), "Request body read successfully");

    match serde_json::from_slice(&body) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(error = %e, "Request body is not a recurrence record");
            write_bad_request(res, e.to_string());
            None
        }
    }
}

fn write_bad_request(res: &mut Response, error: String) {
    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(BadRequestResponse { error }));
}

/// ## Summary
/// Writes a 422 response listing every `{field, message}` violation.
pub(super) fn write_validation_errors(res: &mut Response, errors: ValidationErrors) {
    tracing::debug!(
        error_count = errors.errors().len(),
        errors = %errors,
        "Rejecting recurrence rule"
    );
    res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
    res.render(Json(ValidationErrorResponse { errors }));
}
