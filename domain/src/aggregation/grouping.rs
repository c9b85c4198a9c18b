//! Length-based similarity grouping
//!
//! Length similarity stands in for semantic similarity. Groups are built
//! greedily: each unassigned result anchors a new group and pulls in every
//! later unassigned result whose length is close enough to the anchor's.

use super::result::{ModelResult, ResponseGroup};

/// `1 - |a - b| / avg(a, b)`, with the average floored at one character.
///
/// Can go negative when the lengths differ by more than their average.
pub fn length_similarity(a: usize, b: usize) -> f64 {
    let avg = ((a + b) as f64 / 2.0).max(1.0);
    1.0 - a.abs_diff(b) as f64 / avg
}

/// Partition `results` into groups of similar response length.
///
/// Every result lands in exactly one group. Group order follows the input
/// order of the anchors.
pub fn group_by_length(results: &[ModelResult], threshold: f64) -> Vec<ResponseGroup> {
    let mut processed = vec![false; results.len()];
    let mut groups = Vec::new();

    for (i, anchor) in results.iter().enumerate() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let anchor_len = anchor.response_len();
        let mut group = ResponseGroup::anchored(anchor.clone());

        for (j, candidate) in results.iter().enumerate().skip(i + 1) {
            if processed[j] {
                continue;
            }
            if length_similarity(anchor_len, candidate.response_len()) > threshold {
                group.push(candidate.clone());
                processed[j] = true;
            }
        }

        groups.push(group);
    }

    groups
}
