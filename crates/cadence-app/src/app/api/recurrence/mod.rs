//! Recurrence endpoints: rule validation and occurrence expansion.

mod occurrences;
mod types;
mod validate;

use salvo::Router;

use crate::app::api::RECURRENCE_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECURRENCE_ROUTE_COMPONENT)
        .push(Router::with_path("validate").post(validate::validate))
        .push(Router::with_path("occurrences").post(occurrences::occurrences))
}
