//! Similarity scorers and the recommendation engine built on them.

mod recommender;
pub mod scorer;

pub use rec_types::{
    CandidateScope, EngineConfig, NodeId, RankedCandidate, RecommendError, RecommendationTable,
    ScorerKind, SocialGraph,
};
pub use recommender::Recommender;
