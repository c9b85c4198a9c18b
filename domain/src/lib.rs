//! Domain layer for quorum-aggregate
//!
//! This crate contains the aggregation engine, its value objects and errors.
//! It has no dependencies on infrastructure or presentation concerns, and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! - **ModelResult**: one model's raw answer (or failure) to a single prompt
//! - **Quality score**: a 0–1 composite of length, latency, reputation and
//!   coherence used to rank and filter results
//! - **Consensus**: the single representative answer text, chosen rather
//!   than synthesised
//! - **Group**: results whose response lengths are close to a shared anchor
//! - **Confidence**: how good the surviving results are and how much they
//!   agree

pub mod aggregation;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use aggregation::{
    AggregatedResponse, AggregationPolicy, ConfidenceBreakdown, ModelCategory, ModelProfile,
    ModelReputationLookup, ModelResult, QualityFactors, QualityScorer, ReputationSnapshot,
    ResponseGroup, ResultValidator, UnknownModels,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{AggregationError, ValidationError};
