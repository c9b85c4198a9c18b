//! Success and quality filtering

use super::policy::check_threshold;
use super::reputation::ModelReputationLookup;
use super::result::ModelResult;
use super::scoring::QualityScorer;
use crate::core::error::ValidationError;

/// Results that succeeded and produced non-empty text, in input order.
pub fn successful_responses(results: &[ModelResult]) -> Vec<ModelResult> {
    results.iter().filter(|r| r.is_usable()).cloned().collect()
}

/// Results scoring at or above `threshold`, quality-descending.
///
/// Ties keep their input order.
pub fn filter_by_quality<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
    threshold: f64,
) -> Result<Vec<ModelResult>, ValidationError> {
    check_threshold(threshold)?;

    Ok(scorer
        .rank(results)
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .map(|(result, _)| result.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::reputation::UnknownModels;

    const LONG: &str = "Use a bounded channel for back-pressure. Spawn one worker per core. \
                        Collect results with a join set and surface the first error.";

    #[test]
    fn test_successful_responses_drops_failures_and_empty_text() {
        let results = vec![
            ModelResult::success("a", "A", "Fine."),
            ModelResult::failure("b", "B"),
            ModelResult::success("c", "C", ""),
            ModelResult {
                success: false,
                ..ModelResult::success("d", "D", "Text from a failed call.")
            },
            ModelResult::success("e", "E", "Also fine."),
        ];

        let ids: Vec<_> = successful_responses(&results)
            .into_iter()
            .map(|r| r.model_id)
            .collect();
        assert_eq!(ids, vec!["a", "e"]);
    }

    #[test]
    fn test_filter_by_quality_orders_and_cuts() {
        let scorer = QualityScorer::new(UnknownModels);
        let results = vec![
            ModelResult::success("short", "Short", "Yes."),
            ModelResult::success("long", "Long", LONG).with_latency(900.0),
        ];

        // long: 1.0*0.3 + 1.0*0.2 + 0.5*0.3 + 1.0*0.2 = 0.85
        let kept = filter_by_quality(&scorer, &results, 0.6).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].model_id, "long");

        let all = filter_by_quality(&scorer, &results, 0.3).unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.model_id.as_str()).collect();
        assert_eq!(ids, vec!["long", "short"]);
    }

    #[test]
    fn test_filter_threshold_is_inclusive() {
        let scorer = QualityScorer::new(UnknownModels);
        let results = vec![ModelResult::success("m1", "M1", "Yes.")];
        let score = scorer.score(&results[0]);
        assert_eq!(filter_by_quality(&scorer, &results, score).unwrap().len(), 1);
    }

    #[test]
    fn test_filter_rejects_bad_threshold() {
        let scorer = QualityScorer::new(UnknownModels);
        let err = filter_by_quality(&scorer, &[], 1.2).unwrap_err();
        assert_eq!(err.message(), "Threshold must be a number between 0 and 1");
        assert!(filter_by_quality(&scorer, &[], f64::NAN).is_err());
    }
}
