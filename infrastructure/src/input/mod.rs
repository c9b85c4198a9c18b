//! Batch input - reading raw model results from a file or stdin.

mod batch_reader;

pub use batch_reader::{BatchReader, InputError};
