//! Heuristic scoring for the dermatch recommendation engine.
//!
//! The crate provides the deterministic "AI" layer of the storefront:
//! - **Profile analysis** turns raw questionnaire answers into a classified
//!   [`UserProfile`](dermatch_core::UserProfile) with expanded concerns and a
//!   confidence value. Malformed answers never fail; out-of-range scales fall
//!   back to documented defaults.
//! - **Match scoring** rates one product against one profile on the 0–100
//!   scale via the [`Scorer`](dermatch_core::Scorer) trait, attaching
//!   human-readable match reasons and predicted results.
//! - **Search ranking** rates one product against a sanitised free-text
//!   query, independent of any profile.
//! - **Chat intent classification** maps a chat message onto the concern and
//!   recommendation intents the storefront chatbot handles.
//!
//! Every scoring path is pure: no I/O, no shared mutable state, no
//! randomness. Scoring a catalog is therefore trivially parallelisable; only
//! the final merge has an ordering requirement, and that belongs to the
//! recommender.
//!
//! # Examples
//!
//! ```
//! use dermatch_scorer::{ProfileAnalyzer, RawAnswers};
//!
//! let answers = RawAnswers::new(25)
//!     .with_oiliness("8")
//!     .with_hydration("3")
//!     .with_concerns(["acne"]);
//! let profile = ProfileAnalyzer::default().analyze(&answers);
//! assert_eq!(profile.skin_type.as_str(), "oily");
//! ```

#![forbid(unsafe_code)]

mod analyzer;
mod concerns;
mod intent;
mod matcher;
mod search;
pub(crate) mod signals;

pub use analyzer::{ProfileAnalyzer, RawAnswers, care_advice};
pub use intent::{ChatIntent, ConcernTopic};
pub use matcher::{MatchScorer, MatchWeights, WeightError, usage_timeline};
pub use search::{SearchQuery, SearchRanker, SearchWeights};

#[cfg(test)]
mod tests;
