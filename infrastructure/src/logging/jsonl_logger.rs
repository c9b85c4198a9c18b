//! JSONL file writer for aggregation events.
//!
//! Each [`AggregationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use quorum_application::ports::aggregation_logger::{AggregationEvent, AggregationLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL audit logger that writes one JSON object per line.
///
/// Opens the file in append mode so records from successive runs accumulate.
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAggregationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAggregationLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AggregationLogger for JsonlAggregationLogger {
    fn log(&self, event: AggregationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAggregationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = JsonlAggregationLogger::new(&path).unwrap();

        logger.log(AggregationEvent::new(
            "aggregation_completed",
            serde_json::json!({"best_model": "m1", "group_count": 2, "confidence": 0.8}),
        ));
        logger.log(AggregationEvent::new(
            "aggregation_failed",
            serde_json::json!({"error": "No successful responses to aggregate"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("type").is_some());
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "aggregation_completed");
        assert_eq!(records[0]["best_model"], "m1");
        assert_eq!(records[0]["group_count"], 2);
        assert_eq!(records[1]["type"], "aggregation_failed");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = JsonlAggregationLogger::new(&path).unwrap();

        logger.log(AggregationEvent::new(
            "simple_event",
            serde_json::json!("just a string"),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "simple_event");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.jsonl");

        for run in 0..2 {
            let logger = JsonlAggregationLogger::new(&path).unwrap();
            assert_eq!(logger.path(), path.as_path());
            logger.log(AggregationEvent::new(
                "aggregation_completed",
                serde_json::json!({"run": run}),
            ));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["run"], 1);
    }
}
