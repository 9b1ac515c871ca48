pub mod profile;
pub mod signals;
pub mod tokenizer;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::cultivar::{Cultivar, CultivarStatus};
use crate::types::similarity_result::{
    RankingMetadata, ScoredCandidate, SignalBreakdown, SimilarityMatch, SimilarityResult,
};
pub use profile::WeightedProfile;
pub use signals::{
    composite_score, cosine_similarity, genetic_similarity, scent_similarity, weighted_overlap,
};
pub use tokenizer::tokenize;

/// Number of matches returned when no limit is configured.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub limit: usize,
    /// Discontinued cultivars are left out of the candidate pool unless set.
    pub include_discontinued: bool,
}

impl RankingConfig {
    pub fn v0() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            include_discontinued: false,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Score every signal for one reference/candidate pair.
pub fn score_pair(reference: &Cultivar, candidate: &Cultivar, aliases: &AliasTable) -> SignalBreakdown {
    let reference_profile = WeightedProfile::encode(&reference.terpene_profile, aliases);
    let candidate_profile = WeightedProfile::encode(&candidate.terpene_profile, aliases);
    breakdown(reference, &reference_profile, candidate, &candidate_profile)
}

fn breakdown(
    reference: &Cultivar,
    reference_profile: &WeightedProfile,
    candidate: &Cultivar,
    candidate_profile: &WeightedProfile,
) -> SignalBreakdown {
    SignalBreakdown {
        weighted_overlap: weighted_overlap(reference_profile, candidate_profile),
        cosine: cosine_similarity(reference_profile, candidate_profile),
        genetic: genetic_similarity(&reference.lineage, &candidate.lineage),
        scent: scent_similarity(reference, candidate),
    }
}

/// Composite score desc, then weighted overlap desc, then cosine desc, then name asc.
fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.signals
                .weighted_overlap
                .partial_cmp(&a.signals.weighted_overlap)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            b.signals
                .cosine
                .partial_cmp(&a.signals.cosine)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cultivar.name.cmp(&b.cultivar.name))
}

/// Ranks a candidate pool against a reference cultivar.
///
/// Stateless apart from its configuration; every call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct SimilarityRanker {
    config: RankingConfig,
}

impl SimilarityRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    fn in_pool(&self, reference: &Cultivar, candidate: &Cultivar) -> bool {
        if candidate.name == reference.name {
            return false;
        }
        if !candidate.is_comparable() {
            tracing::trace!(candidate = %candidate.name, "excluded: no descriptor data");
            return false;
        }
        if candidate.status == CultivarStatus::Discontinued && !self.config.include_discontinued {
            tracing::trace!(candidate = %candidate.name, "excluded: discontinued");
            return false;
        }
        if !reference.shares_descriptor_type(candidate) {
            tracing::trace!(candidate = %candidate.name, "excluded: no shared descriptor type");
            return false;
        }
        true
    }

    pub fn rank(
        &self,
        reference: &Cultivar,
        candidates: &[Cultivar],
        aliases: &AliasTable,
    ) -> SimilarityResult {
        let candidates_considered = candidates
            .iter()
            .filter(|candidate| candidate.name != reference.name)
            .count();

        // 1. Pool Phase
        // A reference without descriptor data shares a type with nobody.
        let pool: Vec<&Cultivar> = candidates
            .iter()
            .filter(|candidate| self.in_pool(reference, candidate))
            .collect();

        // 2. Scoring Phase
        let reference_profile = WeightedProfile::encode(&reference.terpene_profile, aliases);
        let mut scored: Vec<ScoredCandidate> = pool
            .iter()
            .map(|&candidate| {
                let candidate_profile = WeightedProfile::encode(&candidate.terpene_profile, aliases);
                let signals = breakdown(reference, &reference_profile, candidate, &candidate_profile);
                let score = composite_score(signals.weighted_overlap, signals.scent, signals.genetic);
                debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
                ScoredCandidate {
                    cultivar: candidate,
                    score,
                    signals,
                }
            })
            .collect();

        // 3. Ordering Phase
        scored.sort_by(compare_scored);

        debug_assert!(scored
            .windows(2)
            .all(|w| compare_scored(&w[0], &w[1]) != Ordering::Greater));

        // 4. Truncation Phase
        let matches: Vec<SimilarityMatch> = scored
            .into_iter()
            .take(self.config.limit)
            .map(ScoredCandidate::into_match)
            .collect();

        tracing::debug!(
            reference = %reference.name,
            considered = candidates_considered,
            comparable = pool.len(),
            returned = matches.len(),
            "ranked similar cultivars"
        );

        let ranking = RankingMetadata {
            reference: reference.name.clone(),
            limit: self.config.limit,
            alias_table_version: aliases.version(),
            candidates_considered,
            candidates_comparable: pool.len(),
            candidates_returned: matches.len(),
        };

        SimilarityResult { matches, ranking }
    }
}

/// Rank `candidates` against `reference` and return at most `limit` matches.
pub fn rank(
    reference: &Cultivar,
    candidates: &[Cultivar],
    aliases: &AliasTable,
    limit: usize,
) -> Vec<SimilarityMatch> {
    SimilarityRanker::new(RankingConfig::v0().with_limit(limit))
        .rank(reference, candidates, aliases)
        .matches
}
