//! Deterministic similarity ranking for cultivar catalogs.
//!
//! `cultivar-match` normalizes loosely structured cultivar records, resolves
//! terpene synonyms through an injected alias table, scores several weak
//! similarity signals (terpene overlap, cosine, lineage, scent) and combines
//! them into a single ranked list. Ranking is a pure function: identical
//! inputs always produce identical outputs, byte-for-byte once serialized.

pub mod alias;
pub mod cultivar;
pub mod similarity;
pub mod types;

pub use alias::AliasTable;
pub use cultivar::{Catalog, Cultivar, CultivarStatus};
pub use similarity::{rank, RankingConfig, SimilarityRanker};
pub use types::{SignalBreakdown, SimilarityLabel, SimilarityMatch, SimilarityResult};
