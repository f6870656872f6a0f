//! Facade crate for the Dermatch recommendation engine.
//!
//! Re-exports the core domain types together with the profile analyzer,
//! scorers, and the recommendation service so downstream users depend on a
//! single crate.

#![forbid(unsafe_code)]

pub use dermatch_core::{
    Climate, MAX_EXPLANATIONS, MatchResult, MemoryProductStore, Product, ProductFilter, ProductId,
    ProductStore, Scorer, SkinType, StoreError, UserProfile, UserProfileError,
};

pub use dermatch_scorer::{
    ChatIntent, ConcernTopic, MatchScorer, MatchWeights, ProfileAnalyzer, RawAnswers, SearchQuery,
    SearchRanker, SearchWeights, WeightError, care_advice, usage_timeline,
};

pub use dermatch_recommend::{
    DEFAULT_LIMIT, RecommendError, RecommendationRequest, Recommender,
};
