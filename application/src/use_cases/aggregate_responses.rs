//! Aggregate Responses use case
//!
//! Sequences the aggregation components over one batch of model results:
//!
//! 1. Validate the batch shape
//! 2. Keep successful results with non-empty text
//! 3. Quality cascade: primary threshold, then fallback threshold
//! 4. Best result, consensus, groups, top responses and confidence
//!
//! The whole computation is synchronous and atomic: either a complete
//! [`AggregatedResponse`] is returned or an [`AggregationError`] is.

use crate::ports::aggregation_logger::{AggregationEvent, AggregationLogger, NoAggregationLogger};
use quorum_domain::aggregation::{
    build_consensus, confidence_breakdown, filter_by_quality, group_by_length, select_best,
    successful_responses, top_n,
};
use quorum_domain::{
    AggregatedResponse, AggregationError, AggregationPolicy, ModelReputationLookup, ModelResult,
    QualityScorer, ReputationSnapshot, ResultValidator,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for aggregating a batch of model results
pub struct AggregateResponsesUseCase<L: ModelReputationLookup> {
    reputation: L,
    policy: AggregationPolicy,
    logger: Arc<dyn AggregationLogger>,
}

impl<L: ModelReputationLookup> AggregateResponsesUseCase<L> {
    pub fn new(reputation: L) -> Self {
        Self {
            reputation,
            policy: AggregationPolicy::default(),
            logger: Arc::new(NoAggregationLogger),
        }
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn AggregationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn policy(&self) -> &AggregationPolicy {
        &self.policy
    }

    /// Aggregate a typed batch.
    pub fn execute(&self, results: &[ModelResult]) -> Result<AggregatedResponse, AggregationError> {
        let outcome = ResultValidator::validate(results)
            .map_err(AggregationError::from)
            .and_then(|()| self.aggregate(results));
        self.record(results.len(), &outcome);
        outcome
    }

    /// Validate and aggregate an untyped JSON batch.
    pub fn execute_json(&self, value: &Value) -> Result<AggregatedResponse, AggregationError> {
        let results = match ResultValidator::validate_json(value) {
            Ok(results) => results,
            Err(e) => {
                let outcome = Err(AggregationError::from(e));
                let input_count = value.as_array().map_or(0, Vec::len);
                self.record(input_count, &outcome);
                return outcome;
            }
        };
        self.execute(&results)
    }

    fn aggregate(&self, results: &[ModelResult]) -> Result<AggregatedResponse, AggregationError> {
        self.policy.validate()?;

        info!("Aggregating {} model results", results.len());

        let successful = successful_responses(results);
        if successful.is_empty() {
            warn!("No successful responses among {} results", results.len());
            return Err(AggregationError::NoSuccessfulResponses);
        }
        debug!(
            "{} of {} results succeeded with text",
            successful.len(),
            results.len()
        );

        // Resolve every reputation once so scoring never goes back to the registry
        let snapshot = ReputationSnapshot::resolve(
            &self.reputation,
            successful.iter().map(|r| r.model_id.as_str()),
        );
        debug!(
            "Resolved reputation for {} known models",
            snapshot.known_count()
        );
        let scorer = QualityScorer::new(snapshot);

        let survivors = self.apply_quality_cascade(&scorer, &successful)?;

        let best_response = select_best(&scorer, &survivors)?;
        let consensus = build_consensus(&scorer, &survivors);
        let groups = group_by_length(&survivors, self.policy.similarity_threshold);
        let top_responses = top_n(&scorer, &survivors, self.policy.top_responses);
        let breakdown = confidence_breakdown(&scorer, &survivors, &consensus);

        info!(
            "Aggregated {} responses into {} groups (best: {}, confidence: {:.3})",
            survivors.len(),
            groups.len(),
            best_response.model_id,
            breakdown.confidence
        );
        debug!(
            "Confidence breakdown: avg_quality={:.3}, agreement={:.3}",
            breakdown.avg_quality, breakdown.agreement
        );

        Ok(AggregatedResponse {
            consensus,
            best_response,
            top_responses,
            groups,
            confidence: breakdown.confidence,
        })
    }

    fn apply_quality_cascade<S: ModelReputationLookup>(
        &self,
        scorer: &QualityScorer<S>,
        successful: &[ModelResult],
    ) -> Result<Vec<ModelResult>, AggregationError> {
        let primary = filter_by_quality(scorer, successful, self.policy.quality_threshold)?;
        if !primary.is_empty() {
            return Ok(primary);
        }

        debug!(
            "No response met quality {:.2}, retrying with {:.2}",
            self.policy.quality_threshold, self.policy.fallback_threshold
        );
        let fallback = filter_by_quality(scorer, successful, self.policy.fallback_threshold)?;
        if fallback.is_empty() {
            warn!("No response met the fallback quality threshold");
            return Err(AggregationError::BelowQualityThreshold);
        }

        info!(
            "Using {} responses from the fallback quality threshold",
            fallback.len()
        );
        Ok(fallback)
    }

    fn record(&self, input_count: usize, outcome: &Result<AggregatedResponse, AggregationError>) {
        let event = match outcome {
            Ok(response) => AggregationEvent::new(
                "aggregation_completed",
                json!({
                    "input_count": input_count,
                    "surviving_count": response.grouped_count(),
                    "group_count": response.groups.len(),
                    "best_model": response.best_response.model_id,
                    "confidence": response.confidence,
                }),
            ),
            Err(e) => AggregationEvent::new(
                "aggregation_failed",
                json!({
                    "input_count": input_count,
                    "validation": e.is_validation(),
                    "error": e.to_string(),
                }),
            ),
        };
        self.logger.log(event);
    }
}
