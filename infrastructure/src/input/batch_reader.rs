//! Reads a JSON results batch.
//!
//! The reader only parses JSON; shape validation is left to
//! [`ResultValidator`](quorum_domain::ResultValidator) so that malformed
//! batches produce the standard validation messages.

use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a batch
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {source_name}: {source}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads raw JSON batches from a path or any reader
pub struct BatchReader;

impl BatchReader {
    /// Read from `path`, or from stdin when `path` is `None` or `-`.
    pub fn read(path: Option<&PathBuf>) -> Result<Value, InputError> {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::read_file(p),
            _ => Self::read_from(std::io::stdin().lock(), "stdin"),
        }
    }

    pub fn read_file(path: &Path) -> Result<Value, InputError> {
        let source_name = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| InputError::Io {
            source_name: source_name.clone(),
            source,
        })?;
        Self::read_from(file, &source_name)
    }

    pub fn read_from(mut reader: impl Read, source_name: &str) -> Result<Value, InputError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| InputError::Io {
                source_name: source_name.to_string(),
                source,
            })?;
        debug!("Read {} bytes from {}", content.len(), source_name);

        serde_json::from_str(&content).map_err(|source| InputError::Json {
            source_name: source_name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_from_reader() {
        let input = r#"[{"modelId": "m1", "modelName": "M1", "success": true, "response": "Hi"}]"#;
        let value = BatchReader::read_from(input.as_bytes(), "test").unwrap();
        assert_eq!(value[0]["modelId"], "m1");
    }

    #[test]
    fn test_non_array_json_is_passed_through() {
        let value = BatchReader::read_from("null".as_bytes(), "test").unwrap();
        assert_eq!(value, json!(null));
    }

    #[test]
    fn test_invalid_json() {
        let err = BatchReader::read_from("[{".as_bytes(), "batch.json").unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
        assert!(err.to_string().starts_with("Invalid JSON in batch.json"));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(&path, r#"[{"success": false, "modelId": "m", "modelName": "M"}]"#)
            .unwrap();

        let value = BatchReader::read(Some(&path)).unwrap();
        assert_eq!(value[0]["success"], false);
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/batch.json");
        let err = BatchReader::read(Some(&path)).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
