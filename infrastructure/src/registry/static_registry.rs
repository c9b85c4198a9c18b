//! In-memory model registry

use crate::config::FileRegistryConfig;
use quorum_domain::{ModelProfile, ModelReputationLookup};
use std::collections::HashMap;
use tracing::debug;

/// Immutable registry of model profiles keyed by model id.
#[derive(Debug, Clone, Default)]
pub struct StaticModelRegistry {
    profiles: HashMap<String, ModelProfile>,
}

impl StaticModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config entries. Entries with an empty id are skipped and
    /// a repeated id keeps the last entry.
    pub fn from_config(config: &FileRegistryConfig) -> Self {
        let mut registry = Self::new();
        for entry in &config.models {
            if entry.id.trim().is_empty() {
                continue;
            }
            registry = registry.with_model(entry.id.clone(), entry.to_profile());
        }
        debug!("Loaded {} models into registry", registry.len());
        registry
    }

    pub fn with_model(mut self, id: impl Into<String>, profile: ModelProfile) -> Self {
        self.profiles.insert(id.into(), profile);
        self
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ModelReputationLookup for StaticModelRegistry {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        self.profiles.get(model_id).cloned()
    }
}
