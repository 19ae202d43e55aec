mod app_specific;
mod recurrence;

use salvo::Router;

// Re-export route constants from core
pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, RECURRENCE_ROUTE_COMPONENT,
    RECURRENCE_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router: app-specific endpoints plus the recurrence
/// endpoints.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(recurrence::routes())
}
