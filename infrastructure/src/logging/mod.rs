//! Logging infrastructure - structured audit logging.
//!
//! Provides [`JsonlAggregationLogger`], a JSONL file writer that implements
//! the [`AggregationLogger`](quorum_application::AggregationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAggregationLogger;
