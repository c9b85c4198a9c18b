//! Quality scoring
//!
//! A result's quality is a weighted sum of four independent factors, each in
//! `[0, 1]`:
//!
//! | Factor       | Weight | Source                                   |
//! |--------------|--------|------------------------------------------|
//! | `length`     | 0.3    | response length in characters            |
//! | `latency`    | 0.2    | call latency in milliseconds             |
//! | `reputation` | 0.3    | [`ModelReputationLookup`] prior          |
//! | `coherence`  | 0.2    | sentence count, then overall length      |

use super::reputation::{ModelProfile, ModelReputationLookup};
use super::result::ModelResult;
use serde::Serialize;
use std::cmp::Ordering;

pub const LENGTH_WEIGHT: f64 = 0.3;
pub const LATENCY_WEIGHT: f64 = 0.2;
pub const REPUTATION_WEIGHT: f64 = 0.3;
pub const COHERENCE_WEIGHT: f64 = 0.2;

/// Prior for models the registry does not know.
pub const UNKNOWN_MODEL_REPUTATION: f64 = 0.5;

const LARGE_MODEL_BYTES: u64 = 5_000_000_000;
const MEDIUM_MODEL_BYTES: u64 = 3_000_000_000;

/// The four precomputed factors behind a quality score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityFactors {
    pub length: f64,
    pub latency: f64,
    pub reputation: f64,
    pub coherence: f64,
}

impl QualityFactors {
    /// Weighted sum, clamped to `[0, 1]`.
    pub fn weighted(&self) -> f64 {
        let score = self.length * LENGTH_WEIGHT
            + self.latency * LATENCY_WEIGHT
            + self.reputation * REPUTATION_WEIGHT
            + self.coherence * COHERENCE_WEIGHT;
        score.clamp(0.0, 1.0)
    }
}

/// Scores results against an injected reputation lookup.
#[derive(Debug, Clone)]
pub struct QualityScorer<L> {
    lookup: L,
}

impl<L: ModelReputationLookup> QualityScorer<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Factor breakdown, or `None` if the result carries no response text.
    pub fn factors(&self, result: &ModelResult) -> Option<QualityFactors> {
        let text = result.text()?;
        let profile = self.lookup.profile(&result.model_id);

        Some(QualityFactors {
            length: length_factor(text.chars().count()),
            latency: latency_factor(result.latency),
            reputation: reputation_factor(profile.as_ref()),
            coherence: coherence_factor(text),
        })
    }

    /// Quality score in `[0, 1]`; `0.0` when there is no response text.
    pub fn score(&self, result: &ModelResult) -> f64 {
        self.factors(result).map_or(0.0, |f| f.weighted())
    }

    /// Pairs each result with its score and sorts quality-descending.
    ///
    /// The sort is stable, so equal scores keep their input order.
    pub fn rank<'a>(&self, results: &'a [ModelResult]) -> Vec<(&'a ModelResult, f64)> {
        let mut scored: Vec<_> = results.iter().map(|r| (r, self.score(r))).collect();
        scored.sort_by(|a, b| descending(a.1, b.1));
        scored
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn length_factor(chars: usize) -> f64 {
    match chars {
        101.. => 1.0,
        51..=100 => 0.7,
        _ => 0.4,
    }
}

fn latency_factor(latency_ms: Option<f64>) -> f64 {
    match latency_ms {
        Some(ms) if ms < 5_000.0 => 1.0,
        Some(ms) if ms < 10_000.0 => 0.7,
        _ => 0.5,
    }
}

/// Reputation prior derived from a registry profile.
pub fn reputation_factor(profile: Option<&ModelProfile>) -> f64 {
    let Some(profile) = profile else {
        return UNKNOWN_MODEL_REPUTATION;
    };

    if profile.category.as_ref().is_some_and(|c| c.is_specialist()) {
        return 0.9;
    }

    match profile.size {
        Some(size) if size > LARGE_MODEL_BYTES => 0.8,
        Some(size) if size > MEDIUM_MODEL_BYTES => 0.7,
        _ => 0.6,
    }
}

/// Number of non-blank segments between runs of `.`, `!` and `?`.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

// The short-text override only applies once the sentence checks have passed.
fn coherence_factor(text: &str) -> f64 {
    match sentence_count(text) {
        0 => 0.3,
        1 => 0.6,
        _ if text.chars().count() < 20 => 0.4,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::reputation::{ModelCategory, UnknownModels};
    use std::collections::HashMap;

    const EPS: f64 = 1e-9;

    fn registry() -> HashMap<String, ModelProfile> {
        HashMap::from([
            (
                "coder".to_string(),
                ModelProfile::new().with_category(ModelCategory::Coding),
            ),
            (
                "thinker".to_string(),
                ModelProfile::new()
                    .with_category(ModelCategory::Reasoning)
                    .with_size(1),
            ),
            ("large".to_string(), ModelProfile::new().with_size(6_000_000_000)),
            ("medium".to_string(), ModelProfile::new().with_size(4_000_000_000)),
            ("small".to_string(), ModelProfile::new().with_size(3_000_000_000)),
            (
                "chat".to_string(),
                ModelProfile::new().with_category(ModelCategory::General),
            ),
        ])
    }

    #[test]
    fn test_length_factor_boundaries() {
        assert_eq!(length_factor(0), 0.4);
        assert_eq!(length_factor(50), 0.4);
        assert_eq!(length_factor(51), 0.7);
        assert_eq!(length_factor(100), 0.7);
        assert_eq!(length_factor(101), 1.0);
    }

    #[test]
    fn test_latency_factor_boundaries() {
        assert_eq!(latency_factor(Some(0.0)), 1.0);
        assert_eq!(latency_factor(Some(4_999.0)), 1.0);
        assert_eq!(latency_factor(Some(5_000.0)), 0.7);
        assert_eq!(latency_factor(Some(9_999.9)), 0.7);
        assert_eq!(latency_factor(Some(10_000.0)), 0.5);
        assert_eq!(latency_factor(None), 0.5);
        assert_eq!(latency_factor(Some(f64::NAN)), 0.5);
    }

    #[test]
    fn test_reputation_factor() {
        let registry = registry();
        let rep = |id: &str| reputation_factor(registry.get(id));

        assert_eq!(rep("unknown"), 0.5);
        assert_eq!(rep("coder"), 0.9);
        assert_eq!(rep("thinker"), 0.9);
        assert_eq!(rep("large"), 0.8);
        assert_eq!(rep("medium"), 0.7);
        assert_eq!(rep("small"), 0.6);
        assert_eq!(rep("chat"), 0.6);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count(""), 0);
        assert_eq!(sentence_count("..!?"), 0);
        assert_eq!(sentence_count("no punctuation"), 1);
        assert_eq!(sentence_count("One. Two!"), 2);
        assert_eq!(sentence_count("One... Two?! Three"), 3);
        assert_eq!(sentence_count("Trailing space. "), 1);
    }

    #[test]
    fn test_coherence_order_of_checks() {
        assert_eq!(coherence_factor("?!"), 0.3);
        assert_eq!(coherence_factor("Just one sentence here."), 0.6);
        // Two sentences but under 20 chars
        assert_eq!(coherence_factor("Hi. Yo."), 0.4);
        assert_eq!(coherence_factor("This is first. This is second."), 1.0);
    }

    #[test]
    fn test_score_missing_response_is_zero() {
        let scorer = QualityScorer::new(UnknownModels);
        let result = ModelResult::failure("m1", "M1");
        assert_eq!(scorer.score(&result), 0.0);
        assert!(scorer.factors(&result).is_none());
    }

    #[test]
    fn test_score_weighted_sum() {
        let scorer = QualityScorer::new(registry());
        let text = "Rust ownership prevents data races at compile time. \
                    Borrowing rules make aliasing and mutation mutually exclusive. \
                    That is the core idea.";
        let result = ModelResult::success("coder", "Coder", text).with_latency(800.0);

        let factors = scorer.factors(&result).unwrap();
        assert_eq!(factors.length, 1.0);
        assert_eq!(factors.latency, 1.0);
        assert_eq!(factors.reputation, 0.9);
        assert_eq!(factors.coherence, 1.0);
        assert!((scorer.score(&result) - 0.97).abs() < EPS);
    }

    #[test]
    fn test_score_short_unknown_model() {
        let scorer = QualityScorer::new(UnknownModels);
        let result = ModelResult::success("m1", "M1", "Yes.");
        // 0.4*0.3 + 0.5*0.2 + 0.5*0.3 + 0.6*0.2
        assert!((scorer.score(&result) - 0.49).abs() < EPS);
    }

    #[test]
    fn test_empty_response_still_scored() {
        let scorer = QualityScorer::new(UnknownModels);
        let result = ModelResult::success("m1", "M1", "");
        // 0.4*0.3 + 0.5*0.2 + 0.5*0.3 + 0.3*0.2
        assert!((scorer.score(&result) - 0.43).abs() < EPS);
    }

    #[test]
    fn test_weighted_is_clamped() {
        let factors = QualityFactors {
            length: 2.0,
            latency: 2.0,
            reputation: 2.0,
            coherence: 2.0,
        };
        assert_eq!(factors.weighted(), 1.0);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let scorer = QualityScorer::new(UnknownModels);
        let results = vec![
            ModelResult::success("a", "A", "Same."),
            ModelResult::success("b", "B", "Much longer answer. With two sentences in it."),
            ModelResult::success("c", "C", "Same."),
        ];
        let ranked = scorer.rank(&results);
        let ids: Vec<_> = ranked.iter().map(|(r, _)| r.model_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
