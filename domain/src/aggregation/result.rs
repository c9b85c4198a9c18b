//! Aggregation value objects - the input batch unit and the composed output.
//!
//! - [`ModelResult`] - one model's raw answer (or failure) to a single prompt
//! - [`ResponseGroup`] - a cluster of results with similar response length
//! - [`AggregatedResponse`] - the complete output of one aggregation run

use serde::{Deserialize, Serialize};

/// Result of a single model invocation, as produced by the parallel dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    /// Opaque model identifier, used for reputation lookup
    pub model_id: String,
    /// Display name
    pub model_name: String,
    /// Whether the call completed successfully
    pub success: bool,
    /// Generated text (may be empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Milliseconds elapsed for the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,
}

impl ModelResult {
    /// Creates a successful result carrying response text.
    pub fn success(
        model_id: impl Into<String>,
        model_name: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_name: model_name.into(),
            success: true,
            response: Some(response.into()),
            latency: None,
        }
    }

    /// Creates a failed result with no response text.
    pub fn failure(model_id: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            model_name: model_name.into(),
            success: false,
            response: None,
            latency: None,
        }
    }

    /// Attaches the call latency in milliseconds.
    pub fn with_latency(mut self, latency_ms: f64) -> Self {
        self.latency = Some(latency_ms);
        self
    }

    /// Response text, if any.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Response length in characters; a missing response counts as zero.
    pub fn response_len(&self) -> usize {
        self.text().map_or(0, |t| t.chars().count())
    }

    /// Returns `true` if the call succeeded and produced non-empty text.
    pub fn is_usable(&self) -> bool {
        self.success && self.text().is_some_and(|t| !t.is_empty())
    }
}

/// A cluster of results whose response lengths are close to its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseGroup {
    /// Members in insertion order; the anchor comes first
    pub responses: Vec<ModelResult>,
    /// Fixed at creation time and never recomputed from member pairs
    pub similarity: f64,
    /// The first member inserted into the group
    pub representative: ModelResult,
}

impl ResponseGroup {
    /// Starts a new group anchored on `representative`.
    pub fn anchored(representative: ModelResult) -> Self {
        Self {
            responses: vec![representative.clone()],
            similarity: 1.0,
            representative,
        }
    }

    pub fn push(&mut self, result: ModelResult) {
        self.responses.push(result);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Complete output of one aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResponse {
    /// Representative answer text
    pub consensus: String,
    /// Highest-quality individual result
    pub best_response: ModelResult,
    /// Up to `top_responses` results, quality-descending
    pub top_responses: Vec<ModelResult>,
    /// Partition of the surviving results
    pub groups: Vec<ResponseGroup>,
    /// Calibrated confidence in `[0, 1]`
    pub confidence: f64,
}

impl AggregatedResponse {
    /// Total number of results across all groups.
    pub fn grouped_count(&self) -> usize {
        self.groups.iter().map(ResponseGroup::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_result_constructors() {
        let ok = ModelResult::success("m1", "M1", "Hello").with_latency(120.0);
        assert!(ok.success);
        assert_eq!(ok.text(), Some("Hello"));
        assert_eq!(ok.latency, Some(120.0));

        let failed = ModelResult::failure("m2", "M2");
        assert!(!failed.success);
        assert!(failed.text().is_none());
        assert_eq!(failed.response_len(), 0);
    }

    #[test]
    fn test_is_usable() {
        assert!(ModelResult::success("m", "M", "text").is_usable());
        assert!(!ModelResult::success("m", "M", "").is_usable());
        assert!(!ModelResult::failure("m", "M").is_usable());

        let mut failed_with_text = ModelResult::success("m", "M", "text");
        failed_with_text.success = false;
        assert!(!failed_with_text.is_usable());
    }

    #[test]
    fn test_response_len_counts_chars() {
        let result = ModelResult::success("m", "M", "héllo");
        assert_eq!(result.response_len(), 5);
    }

    #[test]
    fn test_model_result_uses_camel_case() {
        let result = ModelResult::success("m1", "Model One", "Hi").with_latency(5.0);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "modelId": "m1",
                "modelName": "Model One",
                "success": true,
                "response": "Hi",
                "latency": 5.0
            })
        );

        let parsed: ModelResult =
            serde_json::from_value(json!({"modelId": "m2", "modelName": "M2", "success": false}))
                .unwrap();
        assert_eq!(parsed, ModelResult::failure("m2", "M2"));
    }

    #[test]
    fn test_group_anchored() {
        let anchor = ModelResult::success("m1", "M1", "abc");
        let mut group = ResponseGroup::anchored(anchor.clone());
        group.push(ModelResult::success("m2", "M2", "abd"));

        assert_eq!(group.representative, anchor);
        assert_eq!(group.similarity, 1.0);
        assert_eq!(group.len(), 2);
        assert_eq!(group.responses[0], anchor);
    }
}
