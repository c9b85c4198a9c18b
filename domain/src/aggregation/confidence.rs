//! Confidence estimation
//!
//! ```text
//! confidence = 0.3 * success_rate + 0.4 * avg_quality + 0.3 * agreement
//! ```
//!
//! Agreement is `1 - coefficient of variation` of the response lengths of
//! the top three results.

use super::reputation::ModelReputationLookup;
use super::result::ModelResult;
use super::scoring::QualityScorer;
use super::selection::top_n;
use serde::Serialize;

const SUCCESS_RATE_WEIGHT: f64 = 0.3;
const QUALITY_WEIGHT: f64 = 0.4;
const AGREEMENT_WEIGHT: f64 = 0.3;

/// Number of top results sampled for agreement.
const AGREEMENT_SAMPLE: usize = 3;

/// Components of a confidence estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    pub success_rate: f64,
    pub avg_quality: f64,
    pub agreement: f64,
    pub confidence: f64,
}

impl ConfidenceBreakdown {
    fn zero() -> Self {
        Self {
            success_rate: 0.0,
            avg_quality: 0.0,
            agreement: 0.0,
            confidence: 0.0,
        }
    }
}

/// Confidence in `[0, 1]` for an already-filtered batch.
pub fn estimate_confidence<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
    consensus: &str,
) -> f64 {
    confidence_breakdown(scorer, results, consensus).confidence
}

/// Same as [`estimate_confidence`], keeping the individual components.
///
/// `results` has already been filtered to successful responses, so the
/// success rate is always 1 for non-empty input. The consensus text is
/// accepted for interface stability but does not affect the estimate.
pub fn confidence_breakdown<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
    _consensus: &str,
) -> ConfidenceBreakdown {
    if results.is_empty() {
        return ConfidenceBreakdown::zero();
    }

    let success_rate = 1.0;
    let avg_quality =
        results.iter().map(|r| scorer.score(r)).sum::<f64>() / results.len() as f64;
    let agreement = agreement(scorer, results);

    let confidence = SUCCESS_RATE_WEIGHT * success_rate
        + QUALITY_WEIGHT * avg_quality
        + AGREEMENT_WEIGHT * agreement;

    ConfidenceBreakdown {
        success_rate,
        avg_quality,
        agreement,
        confidence: confidence.clamp(0.0, 1.0),
    }
}

fn agreement<L: ModelReputationLookup>(scorer: &QualityScorer<L>, results: &[ModelResult]) -> f64 {
    let top = top_n(scorer, results, AGREEMENT_SAMPLE);
    if top.len() < 2 {
        return 1.0;
    }

    let lengths: Vec<f64> = top
        .iter()
        .map(ModelResult::response_len)
        .filter(|&len| len > 0)
        .map(|len| len as f64)
        .collect();
    if lengths.len() < 2 {
        return 0.5;
    }

    let n = lengths.len() as f64;
    let avg = lengths.iter().sum::<f64>() / n;
    if avg == 0.0 {
        return 0.0;
    }

    let variance = lengths.iter().map(|len| (len - avg).powi(2)).sum::<f64>() / n;
    let cv = variance.sqrt() / avg;
    (1.0 - cv).clamp(0.0, 1.0)
}
