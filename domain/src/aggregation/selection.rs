//! Best-response selection, consensus and top-N ranking
//!
//! Consensus is a selection, not a synthesis: the consensus text is the
//! verbatim response of the highest-scoring result.

use super::reputation::ModelReputationLookup;
use super::result::ModelResult;
use super::scoring::QualityScorer;
use crate::core::error::ValidationError;

/// Highest-scoring result; the earliest one wins ties.
pub fn select_best<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
) -> Result<ModelResult, ValidationError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(ValidationError::new(
            "Cannot select best from empty responses array",
        ));
    };

    if rest.is_empty() {
        return Ok(first.clone());
    }

    let (best, _) = rest.iter().fold((first, scorer.score(first)), |best, candidate| {
        let score = scorer.score(candidate);
        if score > best.1 {
            (candidate, score)
        } else {
            best
        }
    });
    Ok(best.clone())
}

/// Representative answer text for the batch.
///
/// Empty input yields an empty string.
pub fn build_consensus<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
) -> String {
    let chosen = match results {
        [] => return String::new(),
        [only] => only,
        _ => match scorer.rank(results).first() {
            Some((top, _)) => *top,
            None => return String::new(),
        },
    };
    chosen.response.clone().unwrap_or_default()
}

/// The `n` best results, quality-descending.
pub fn top_n<L: ModelReputationLookup>(
    scorer: &QualityScorer<L>,
    results: &[ModelResult],
    n: usize,
) -> Vec<ModelResult> {
    scorer
        .rank(results)
        .into_iter()
        .take(n)
        .map(|(result, _)| result.clone())
        .collect()
}
