//! Application layer for quorum-aggregate
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::aggregation_logger::{AggregationEvent, AggregationLogger, NoAggregationLogger};
pub use use_cases::aggregate_responses::AggregateResponsesUseCase;
