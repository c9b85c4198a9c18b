//! Model reputation registry backed by configuration.
//!
//! Provides [`StaticModelRegistry`], an in-memory
//! [`ModelReputationLookup`](quorum_domain::ModelReputationLookup)
//! populated from `[[registry.models]]` entries.

mod static_registry;

pub use static_registry::StaticModelRegistry;
