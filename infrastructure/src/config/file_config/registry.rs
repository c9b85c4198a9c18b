//! Model registry configuration from TOML (`[[registry.models]]` tables)

use quorum_domain::{ConfigIssue, ConfigIssueCode, ModelCategory, ModelProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Model registry configuration from TOML.
///
/// # Example
///
/// ```toml
/// [[registry.models]]
/// id = "gpt-5.2-codex"
/// category = "coding"
///
/// [[registry.models]]
/// id = "llama-3-8b"
/// size = 8000000000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    pub models: Vec<FileModelEntry>,
}

/// A single registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileModelEntry {
    /// Model identifier, matched against `modelId` in results
    pub id: String,
    /// Declared specialty ("coding", "reasoning", ...)
    #[serde(default)]
    pub category: Option<String>,
    /// Declared model size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

impl FileModelEntry {
    pub fn to_profile(&self) -> ModelProfile {
        ModelProfile {
            category: self
                .category
                .as_deref()
                .map(|c| c.parse::<ModelCategory>().unwrap_or_else(|e| match e {})),
            size: self.size,
        }
    }
}

impl FileRegistryConfig {
    /// Check for empty and duplicate model ids.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.models {
            if entry.id.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelId,
                    "registry.models: model id cannot be empty",
                ));
            } else if !seen.insert(entry.id.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateModelId {
                        id: entry.id.clone(),
                    },
                    format!(
                        "registry.models: '{}' is registered more than once, the last entry wins",
                        entry.id
                    ),
                ));
            }
        }

        issues
    }
}
