/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const RECURRENCE_ROUTE_COMPONENT: &str = "recurrence";
pub const RECURRENCE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RECURRENCE_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";

/// Default ceiling for the number of occurrences a single request may ask for.
pub const DEFAULT_MAX_CAP: usize = 1000;
