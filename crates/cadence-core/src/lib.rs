//! Shared configuration, errors and constants for the Cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
