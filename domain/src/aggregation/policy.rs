//! Tunable knobs for one aggregation run

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUALITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.3;
pub const DEFAULT_TOP_RESPONSES: usize = 5;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Thresholds and limits applied by the aggregation pipeline.
///
/// The defaults reproduce the fixed behaviour: primary quality 0.6, fallback
/// 0.3, five top responses and a length-similarity cutoff of 0.7.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationPolicy {
    /// Minimum score for the first filtering pass
    pub quality_threshold: f64,
    /// Minimum score when the first pass leaves nothing
    pub fallback_threshold: f64,
    /// Maximum number of entries in `top_responses`
    pub top_responses: usize,
    /// Length similarity a result must exceed to join a group
    pub similarity_threshold: f64,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            top_responses: DEFAULT_TOP_RESPONSES,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl AggregationPolicy {
    pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
        self.quality_threshold = threshold;
        self
    }

    pub fn with_fallback_threshold(mut self, threshold: f64) -> Self {
        self.fallback_threshold = threshold;
        self
    }

    pub fn with_top_responses(mut self, n: usize) -> Self {
        self.top_responses = n;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Rejects any threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_threshold(self.quality_threshold)?;
        check_threshold(self.fallback_threshold)?;
        check_threshold(self.similarity_threshold)
    }
}

/// NaN and anything outside `[0, 1]` is rejected.
pub fn check_threshold(threshold: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "Threshold must be a number between 0 and 1",
        ))
    }
}
