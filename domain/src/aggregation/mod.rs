//! Multi-model response aggregation
//!
//! Given a batch of independently produced answers to the same prompt, the
//! components in this module pick the best answer, choose a representative
//! consensus text, cluster similar answers and estimate confidence.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌───────────────────────────┐
//! │ validation   │ → │ filter       │ → │ selection / grouping /    │
//! │ (shape)      │   │ success, 0.6 │   │ confidence                │
//! │              │   │ then 0.3     │   │ (over the surviving set)  │
//! └──────────────┘   └──────────────┘   └───────────────────────────┘
//!                           ↑
//!                    scoring (+ reputation lookup)
//! ```
//!
//! Everything here is synchronous and free of I/O. The reputation registry
//! is injected through [`reputation::ModelReputationLookup`]; the
//! orchestration lives in the application layer.

pub mod confidence;
pub mod filter;
pub mod grouping;
pub mod policy;
pub mod reputation;
pub mod result;
pub mod scoring;
pub mod selection;
pub mod validation;

pub use confidence::{ConfidenceBreakdown, confidence_breakdown, estimate_confidence};
pub use filter::{filter_by_quality, successful_responses};
pub use grouping::{group_by_length, length_similarity};
pub use policy::AggregationPolicy;
pub use reputation::{
    ModelCategory, ModelProfile, ModelReputationLookup, ReputationSnapshot, UnknownModels,
};
pub use result::{AggregatedResponse, ModelResult, ResponseGroup};
pub use scoring::{QualityFactors, QualityScorer};
pub use selection::{build_consensus, select_best, top_n};
pub use validation::ResultValidator;
