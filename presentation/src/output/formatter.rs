//! Output formatter trait

use quorum_domain::AggregatedResponse;

/// Trait for formatting aggregation results
pub trait OutputFormatter {
    /// Human-readable summary
    fn format_summary(&self, response: &AggregatedResponse) -> String;

    /// Format as JSON
    fn format_json(&self, response: &AggregatedResponse) -> String;
}
