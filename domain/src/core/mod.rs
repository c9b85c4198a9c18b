//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] - malformed input batches
//! - [`error::AggregationError`] - failures while aggregating results

pub mod error;
