//! Model reputation lookup
//!
//! Reputation is a per-model quality prior that does not depend on the
//! response text. The engine only needs a read-only view of it, so the
//! registry is injected through [`ModelReputationLookup`] instead of being
//! reached through global state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

/// Declared specialty of a model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    Coding,
    Reasoning,
    General,
    Other(String),
}

impl ModelCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ModelCategory::Coding => "coding",
            ModelCategory::Reasoning => "reasoning",
            ModelCategory::General => "general",
            ModelCategory::Other(s) => s,
        }
    }

    /// Coding and reasoning models receive the highest prior.
    pub fn is_specialist(&self) -> bool {
        matches!(self, ModelCategory::Coding | ModelCategory::Reasoning)
    }
}

impl std::fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "coding" => ModelCategory::Coding,
            "reasoning" => ModelCategory::Reasoning,
            "general" => ModelCategory::General,
            other => ModelCategory::Other(other.to_string()),
        })
    }
}

impl Serialize for ModelCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(category) = s.parse::<ModelCategory>();
        Ok(category)
    }
}

/// Registry metadata for a single model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ModelCategory>,
    /// Declared model size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ModelProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: ModelCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Read-only access to model reputation data.
///
/// Implementations must be side-effect free and return the same answer for
/// the same id for the duration of one aggregation run.
pub trait ModelReputationLookup {
    /// Profile for `model_id`, or `None` if the model is unknown
    fn profile(&self, model_id: &str) -> Option<ModelProfile>;
}

/// Lookup that knows no models; every result gets the neutral prior.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownModels;

impl ModelReputationLookup for UnknownModels {
    fn profile(&self, _model_id: &str) -> Option<ModelProfile> {
        None
    }
}

impl ModelReputationLookup for HashMap<String, ModelProfile> {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        self.get(model_id).cloned()
    }
}

impl<T: ModelReputationLookup + ?Sized> ModelReputationLookup for &T {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        (**self).profile(model_id)
    }
}

impl<T: ModelReputationLookup + ?Sized> ModelReputationLookup for Arc<T> {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        (**self).profile(model_id)
    }
}

impl<T: ModelReputationLookup + ?Sized> ModelReputationLookup for Box<T> {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        (**self).profile(model_id)
    }
}

/// Profiles for every model id in a batch, resolved up front.
///
/// Scoring runs against the snapshot so that a slow or changing registry is
/// consulted at most once per known id per run.
#[derive(Debug, Clone, Default)]
pub struct ReputationSnapshot {
    profiles: HashMap<String, ModelProfile>,
}

impl ReputationSnapshot {
    pub fn resolve<'a, L, I>(lookup: &L, model_ids: I) -> Self
    where
        L: ModelReputationLookup + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let mut profiles = HashMap::new();
        for id in model_ids {
            if profiles.contains_key(id) {
                continue;
            }
            if let Some(profile) = lookup.profile(id) {
                profiles.insert(id.to_string(), profile);
            }
        }
        Self { profiles }
    }

    /// Number of ids the underlying lookup recognised
    pub fn known_count(&self) -> usize {
        self.profiles.len()
    }
}

impl ModelReputationLookup for ReputationSnapshot {
    fn profile(&self, model_id: &str) -> Option<ModelProfile> {
        self.profiles.profile(model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_category_roundtrip() {
        for name in ["coding", "reasoning", "general", "vision"] {
            let category: ModelCategory = name.parse().unwrap();
            assert_eq!(category.to_string(), name);
        }
        assert_eq!(
            "vision".parse::<ModelCategory>().unwrap(),
            ModelCategory::Other("vision".to_string())
        );
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let category: ModelCategory = "Coding".parse().unwrap();
        assert!(!category.is_specialist());
    }

    #[test]
    fn test_profile_deserialize() {
        let profile: ModelProfile =
            serde_json::from_str(r#"{"category": "reasoning", "size": 7000000000}"#).unwrap();
        assert_eq!(profile.category, Some(ModelCategory::Reasoning));
        assert_eq!(profile.size, Some(7_000_000_000));
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert(
            "m1".to_string(),
            ModelProfile::new().with_category(ModelCategory::Coding),
        );
        assert!(map.profile("m1").is_some());
        assert!(map.profile("m2").is_none());
        assert!(UnknownModels.profile("m1").is_none());
    }

    struct CountingLookup {
        calls: Cell<usize>,
    }

    impl ModelReputationLookup for CountingLookup {
        fn profile(&self, model_id: &str) -> Option<ModelProfile> {
            self.calls.set(self.calls.get() + 1);
            (model_id != "unknown").then(|| ModelProfile::new().with_size(1))
        }
    }

    #[test]
    fn test_snapshot_resolves_each_known_id_once() {
        let lookup = CountingLookup {
            calls: Cell::new(0),
        };
        let snapshot = ReputationSnapshot::resolve(&lookup, ["a", "b", "a", "unknown"]);

        assert_eq!(snapshot.known_count(), 2);
        assert_eq!(snapshot.profile("a"), Some(ModelProfile::new().with_size(1)));
        assert!(snapshot.profile("unknown").is_none());
        // the repeated "a" is served from the snapshot
        assert_eq!(lookup.calls.get(), 3);
    }
}
