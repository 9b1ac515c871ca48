pub mod identifiers;
pub mod similarity_result;

pub use identifiers::AliasTableVersion;
pub use similarity_result::{
    RankingMetadata, SignalBreakdown, SimilarityError, SimilarityLabel, SimilarityMatch,
    SimilarityResult,
};
