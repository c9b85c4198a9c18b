//! Domain error types

use thiserror::Error;

/// Malformed input shape.
///
/// The message is surfaced to callers verbatim, so it carries the exact
/// wording (including the offending index) rather than a structured code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Validation failure for a single element of a results batch
    pub fn at_index(index: usize, requirement: &str) -> Self {
        Self(format!("Result at index {} {}", index, requirement))
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Errors raised while aggregating a batch of model results
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No successful responses to aggregate")]
    NoSuccessfulResponses,

    #[error("No responses meet quality threshold")]
    BelowQualityThreshold,
}

impl AggregationError {
    /// Check if this error was caused by malformed input
    pub fn is_validation(&self) -> bool {
        matches!(self, AggregationError::Validation(_))
    }
}
