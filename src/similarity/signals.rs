//! Independent similarity signals and the composite that combines them.
//!
//! Every scorer is pure and returns a value in `[0, 1]`. Zero means "no
//! evidence of similarity", which includes "not enough data to compare".

use std::collections::BTreeSet;

use super::profile::WeightedProfile;
use crate::cultivar::Cultivar;

/// Weight of the terpene overlap signal in the composite score.
pub const WEIGHTED_OVERLAP_WEIGHT: f64 = 0.75;
/// Weight of the scent/aroma signal in the composite score.
pub const SCENT_WEIGHT: f64 = 0.15;
/// Weight of the lineage signal in the composite score.
pub const GENETIC_WEIGHT: f64 = 0.10;

/// Lineage score when one non-empty lineage is contained in the other.
///
/// Lineage data is sparse and unreliable, so the signal is a coarse
/// three-level bucket rather than a ratio. Both levels were chosen empirically.
pub const GENETIC_SUBSET_SCORE: f64 = 0.5;
/// Lineage score when the lineages intersect without containment.
pub const GENETIC_PARTIAL_SCORE: f64 = 0.25;

/// Shared weight over total weight across the union of both profiles.
pub fn weighted_overlap(reference: &WeightedProfile, candidate: &WeightedProfile) -> f64 {
    let mut shared = 0.0;
    let mut total = 0.0;
    for (a, b) in reference.union_weights(candidate) {
        shared += a.min(b);
        total += a.max(b);
    }

    if total == 0.0 {
        0.0
    } else {
        (shared / total).clamp(0.0, 1.0)
    }
}

/// Cosine of the two weight vectors laid out over the union of terpenes.
pub fn cosine_similarity(reference: &WeightedProfile, candidate: &WeightedProfile) -> f64 {
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (a, b) in reference.union_weights(candidate) {
        dot += a * b;
        mag_a += a * a;
        mag_b += b * b;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        (dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(0.0, 1.0)
    }
}

pub fn genetic_similarity(reference: &BTreeSet<String>, candidate: &BTreeSet<String>) -> f64 {
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    if reference.is_subset(candidate) || candidate.is_subset(reference) {
        GENETIC_SUBSET_SCORE
    } else if !reference.is_disjoint(candidate) {
        GENETIC_PARTIAL_SCORE
    } else {
        0.0
    }
}

/// Jaccard overlap of scent and aroma tokens, category by category.
///
/// Only categories populated on both sides count; when both do, their
/// ratios are averaged.
pub fn scent_similarity(reference: &Cultivar, candidate: &Cultivar) -> f64 {
    let ratios: Vec<f64> = [
        jaccard(&reference.scent, &candidate.scent),
        jaccard(&reference.aroma, &candidate.aroma),
    ]
    .into_iter()
    .flatten()
    .collect();

    if ratios.is_empty() {
        0.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    }
}

/// `None` when either side has no tokens.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    Some(intersection / union)
}

/// Weighted sum of the three ranked signals. Cosine is not part of it.
pub fn composite_score(weighted_overlap: f64, scent: f64, genetic: f64) -> f64 {
    let score = WEIGHTED_OVERLAP_WEIGHT * weighted_overlap
        + SCENT_WEIGHT * scent
        + GENETIC_WEIGHT * genetic;
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert_eq!(composite_score(1.0, 1.0, 1.0), 1.0);
        assert_eq!(composite_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn jaccard_needs_both_sides() {
        let a: BTreeSet<String> = ["zitrus".to_string()].into_iter().collect();
        assert_eq!(jaccard(&a, &BTreeSet::new()), None);
        assert_eq!(jaccard(&a, &a), Some(1.0));
    }
}
