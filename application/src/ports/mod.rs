//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The reputation lookup port is a domain trait
//! ([`quorum_domain::ModelReputationLookup`]) because scoring depends on it.

pub mod aggregation_logger;
