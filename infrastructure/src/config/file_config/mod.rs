//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod aggregation;
mod logging;
mod output;
mod registry;

pub use aggregation::FileAggregationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use registry::{FileModelEntry, FileRegistryConfig};

use quorum_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Aggregation policy
    pub aggregation: FileAggregationConfig,
    /// Model reputation registry
    pub registry: FileRegistryConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Aggregation thresholds (range and ordering)
    /// 2. Registry model ids (empty and duplicate)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.aggregation.to_policy().1);
        issues.extend(self.registry.validate());
        issues
    }
}
