use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cultivar::Cultivar;
use crate::types::identifiers::AliasTableVersion;

/// Per-signal scores behind a composite score. Every value is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub weighted_overlap: f64,
    /// Explanatory only; used as a tie-breaker, never weighted.
    pub cosine: f64,
    pub genetic: f64,
    pub scent: f64,
}

/// Qualitative band for a composite score. Display only, never used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityLabel {
    #[serde(rename = "sehr hoch")]
    VeryHigh,
    #[serde(rename = "hoch")]
    High,
    #[serde(rename = "mittel")]
    Medium,
    #[serde(rename = "niedrig")]
    Low,
    #[serde(rename = "sehr niedrig")]
    VeryLow,
}

impl SimilarityLabel {
    /// Buckets a composite score. A score of `0` (or anything not above it) has no label.
    pub fn from_score(score: f64) -> Option<Self> {
        if score >= 0.8 {
            Some(Self::VeryHigh)
        } else if score >= 0.6 {
            Some(Self::High)
        } else if score >= 0.4 {
            Some(Self::Medium)
        } else if score >= 0.2 {
            Some(Self::Low)
        } else if score > 0.0 {
            Some(Self::VeryLow)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHigh => "sehr hoch",
            Self::High => "hoch",
            Self::Medium => "mittel",
            Self::Low => "niedrig",
            Self::VeryLow => "sehr niedrig",
        }
    }
}

impl fmt::Display for SimilarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked candidate returned in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub name: String,
    pub score: f64,
    pub signals: SignalBreakdown,
    pub label: Option<SimilarityLabel>,
}

/// Metadata describing how the ranking was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub reference: String,
    pub limit: usize,
    pub alias_table_version: AliasTableVersion,

    /// Catalog entries other than the reference.
    pub candidates_considered: usize,
    /// Entries left after pool filtering and eligibility checks.
    pub candidates_comparable: usize,
    pub candidates_returned: usize,
}

/// The final result of a similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub matches: Vec<SimilarityMatch>,
    pub ranking: RankingMetadata,
}

/// Internal: a candidate that has been scored but not yet ordered or truncated.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub cultivar: &'a Cultivar,
    pub score: f64,
    pub signals: SignalBreakdown,
}

impl ScoredCandidate<'_> {
    pub fn into_match(self) -> SimilarityMatch {
        SimilarityMatch {
            name: self.cultivar.name.clone(),
            score: self.score,
            signals: self.signals,
            label: SimilarityLabel::from_score(self.score),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("Unknown reference cultivar: {0}")]
    UnknownReference(String),
}
