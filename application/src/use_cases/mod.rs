//! Use cases (application services)

pub mod aggregate_responses;
