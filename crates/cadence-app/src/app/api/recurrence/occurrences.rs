//! Occurrence expansion endpoint.

use cadence_rule::error::{ValidationError, ValidationErrors};
use cadence_rule::rule::{ExpansionOptions, validate};
use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, handler};

use super::types::{
    OccurrencesRequest, OccurrencesResponse, read_json_body, write_validation_errors,
};
use crate::config::get_config_from_depot;

/// ## Summary
/// Validates a recurrence editor record and expands it into at most `cap`
/// dates, optionally restricted to `[rangeStart, rangeEnd)`.
///
/// ## Errors
/// Returns 400 for a malformed body or a missing `cap`, 422 for an invalid
/// rule or a `cap` above `expansion.max_cap`, and 500 if the settings are
/// missing from the depot.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn occurrences(req: &mut Request, res: &mut Response, depot: &Depot) {
    tracing::info!("Handling occurrence expansion request");

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Settings not found in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let Some(request) = read_json_body::<OccurrencesRequest>(req, res).await else {
        return;
    };

    let max_cap = settings.expansion.max_cap;
    let cap_message = format!("must be at most {max_cap}");
    let cap_exceeded = request.cap > max_cap;

    let schedule = match validate(&request.input) {
        Ok(schedule) if !cap_exceeded => schedule,
        Ok(_) => {
            write_validation_errors(res, ValidationErrors::single("cap", cap_message));
            return;
        }
        Err(errors) => {
            let mut errors = errors.into_inner();
            if cap_exceeded {
                errors.push(ValidationError::new("cap", cap_message));
            }
            write_validation_errors(res, ValidationErrors::new(errors));
            return;
        }
    };

    let options = ExpansionOptions::new(request.cap);
    let options = match (request.range_start, request.range_end) {
        (Some(start), Some(end)) => options.with_range(start, end),
        (Some(start), None) => options.with_range_start(start),
        (None, Some(end)) => options.with_range_end(end),
        (None, None) => options,
    };

    let expanded = schedule.expand(&options);
    tracing::debug!(
        rule = %schedule.rule(),
        count = expanded.len(),
        "Occurrences expanded"
    );

    res.render(Json(OccurrencesResponse {
        occurrences: expanded,
        rrule: schedule.rule().to_string(),
    }));
}
