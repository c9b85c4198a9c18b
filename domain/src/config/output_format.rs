//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for aggregation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Consensus, confidence and group overview (default)
    #[default]
    Summary,
    /// The full `AggregatedResponse` as JSON
    Json,
}
