//! Infrastructure layer for quorum-aggregate
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: configuration file loading, the
//! config-backed model registry, batch input reading and the JSONL audit log.

pub mod config;
pub mod input;
pub mod logging;
pub mod registry;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAggregationConfig, FileConfig, FileLoggingConfig, FileModelEntry,
    FileOutputConfig, FileRegistryConfig,
};
pub use input::{BatchReader, InputError};
pub use logging::JsonlAggregationLogger;
pub use registry::StaticModelRegistry;
