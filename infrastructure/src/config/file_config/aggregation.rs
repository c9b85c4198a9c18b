//! Aggregation policy configuration from TOML (`[aggregation]` section)

use quorum_domain::{AggregationPolicy, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Aggregation policy configuration from TOML.
///
/// # Example
///
/// ```toml
/// [aggregation]
/// quality_threshold = 0.6
/// fallback_threshold = 0.3
/// top_responses = 5
/// similarity_threshold = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAggregationConfig {
    /// Minimum quality for the first filtering pass.
    pub quality_threshold: f64,
    /// Minimum quality for the retry pass.
    pub fallback_threshold: f64,
    /// Number of results reported as top responses.
    pub top_responses: usize,
    /// Length similarity a result must exceed to join a group.
    pub similarity_threshold: f64,
}

impl Default for FileAggregationConfig {
    fn default() -> Self {
        let policy = AggregationPolicy::default();
        Self {
            quality_threshold: policy.quality_threshold,
            fallback_threshold: policy.fallback_threshold,
            top_responses: policy.top_responses,
            similarity_threshold: policy.similarity_threshold,
        }
    }
}

impl FileAggregationConfig {
    /// Convert to domain `AggregationPolicy`, returning validation issues.
    ///
    /// If any threshold is out of range, falls back to
    /// `AggregationPolicy::default()` and returns a warning per bad field.
    pub fn to_policy(&self) -> (AggregationPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        for (field, value) in [
            ("quality_threshold", self.quality_threshold),
            ("fallback_threshold", self.fallback_threshold),
            ("similarity_threshold", self.similarity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ThresholdOutOfRange {
                        field: format!("aggregation.{}", field),
                    },
                    format!(
                        "aggregation.{}: {} is outside [0, 1], using default policy",
                        field, value
                    ),
                ));
            }
        }

        if !issues.is_empty() {
            return (AggregationPolicy::default(), issues);
        }

        if self.fallback_threshold > self.quality_threshold {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::FallbackAbovePrimary,
                format!(
                    "aggregation.fallback_threshold ({}) is above quality_threshold ({}); \
                     the fallback pass will never admit additional responses",
                    self.fallback_threshold, self.quality_threshold
                ),
            ));
        }

        let policy = AggregationPolicy {
            quality_threshold: self.quality_threshold,
            fallback_threshold: self.fallback_threshold,
            top_responses: self.top_responses,
            similarity_threshold: self.similarity_threshold,
        };
        (policy, issues)
    }
}
