//! Validation endpoint.

use cadence_rule::rule::{self, RecurrenceInput};
use salvo::prelude::Json;
use salvo::{Request, Response, handler};

use super::types::{RuleResponse, read_json_body, write_validation_errors};

/// ## Summary
/// Validates a recurrence editor record and returns its RRULE and an
/// English summary.
///
/// ## Errors
/// Returns 400 for a body that is not a recurrence record and 422 with every
/// violation for an invalid rule.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn validate(req: &mut Request, res: &mut Response) {
    tracing::info!("Handling recurrence validation request");

    let Some(input) = read_json_body::<RecurrenceInput>(req, res).await else {
        return;
    };

    match rule::validate(&input) {
        Ok(schedule) => res.render(Json(RuleResponse::from(&schedule))),
        Err(errors) => write_validation_errors(res, errors),
    }
}
