//! Shape validation for result batches
//!
//! Typed batches can only be malformed by being empty. Untyped JSON batches
//! are checked element by element, in a fixed field order, and the first
//! failure wins.

use super::result::ModelResult;
use crate::core::error::ValidationError;
use serde_json::{Map, Value};

pub struct ResultValidator;

impl ResultValidator {
    /// Validate a typed batch.
    pub fn validate(results: &[ModelResult]) -> Result<(), ValidationError> {
        if results.is_empty() {
            return Err(ValidationError::new("Results array cannot be empty"));
        }
        Ok(())
    }

    /// Validate an untyped batch and convert it into typed results.
    ///
    /// A `latency` that is not a number is treated as absent.
    pub fn validate_json(value: &Value) -> Result<Vec<ModelResult>, ValidationError> {
        let items = match value {
            Value::Null => return Err(ValidationError::new("Results array is required")),
            Value::Array(items) => items,
            _ => return Err(ValidationError::new("Results must be an array")),
        };

        if items.is_empty() {
            return Err(ValidationError::new("Results array cannot be empty"));
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self::validate_item(index, item))
            .collect()
    }

    fn validate_item(index: usize, item: &Value) -> Result<ModelResult, ValidationError> {
        let Value::Object(fields) = item else {
            return Err(ValidationError::at_index(index, "must be an object"));
        };

        let success = fields
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                ValidationError::at_index(index, "must have a boolean 'success' field")
            })?;
        let model_id = string_field(fields, "modelId")
            .ok_or_else(|| ValidationError::at_index(index, "must have a string 'modelId' field"))?;
        let model_name = string_field(fields, "modelName").ok_or_else(|| {
            ValidationError::at_index(index, "must have a string 'modelName' field")
        })?;

        let response = match fields.get("response") {
            None => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                return Err(ValidationError::at_index(
                    index,
                    "must have a string 'response' field or undefined",
                ));
            }
        };

        Ok(ModelResult {
            model_id,
            model_name,
            success,
            response,
            latency: fields.get("latency").and_then(Value::as_f64),
        })
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}
