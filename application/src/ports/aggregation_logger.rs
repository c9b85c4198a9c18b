//! Port for structured aggregation logging.
//!
//! Defines the [`AggregationLogger`] trait for recording the outcome of each
//! aggregation run to a structured audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per run (JSONL).

use serde_json::Value;

/// A structured aggregation event for logging.
pub struct AggregationEvent {
    /// Event type identifier (e.g., "aggregation_completed", "aggregation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AggregationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging aggregation events to a structured log.
///
/// The `log` method is synchronous and non-fallible: logging failures never
/// affect the aggregation result.
pub trait AggregationLogger: Send + Sync {
    /// Record an aggregation event.
    fn log(&self, event: AggregationEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoAggregationLogger;

impl AggregationLogger for NoAggregationLogger {
    fn log(&self, _event: AggregationEvent) {}
}
