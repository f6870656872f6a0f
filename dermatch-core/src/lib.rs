//! Core domain types for the dermatch recommendation engine.
//!
//! These models provide basic validation to keep downstream components
//! honest: constructors return `Result` to surface invalid input early, and
//! every score reported to callers is clamped into `0.0..=100.0`.
//!
//! The crate defines three seams consumed by the rest of the workspace:
//! - [`Scorer`] — profile-to-product compatibility scoring.
//! - [`ProductStore`] — read-only access to the product catalog.
//! - [`MatchResult`] — the ranked, explained output unit.

#![forbid(unsafe_code)]

mod product;
mod profile;
mod result;
mod scorer;
mod skin;
mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use product::{Product, ProductId};
pub use profile::{UserProfile, UserProfileError};
pub use result::{MAX_EXPLANATIONS, MatchResult};
pub use scorer::Scorer;
pub use skin::{Climate, SkinType};
pub use store::{MemoryProductStore, ProductFilter, ProductStore, StoreError};
