//! Score products for a user profile.
//!
//! The `Scorer` trait assigns a compatibility score to a [`Product`] given a
//! finalised [`UserProfile`].

use crate::{Product, UserProfile};

/// Calculate a compatibility score for a product.
///
/// Higher scores indicate a better match between the product and the
/// caller's skin profile. Implementations must be thread-safe
/// (`Send + Sync`) so catalogs can be scored across threads.
/// The method is infallible; implementers must return `0.0` when no
/// information is available — missing optional product fields contribute
/// nothing, they are never an error.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=100.0`.
/// - Be deterministic: the same `(product, profile)` pair always yields the
///   same score.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use dermatch_core::{Climate, Product, Scorer, SkinType, UserProfile};
///
/// struct BaselineScorer;
///
/// impl Scorer for BaselineScorer {
///     fn score(&self, product: &Product, _profile: &UserProfile) -> f32 {
///         Self::sanitise(product.base_match_score)
///     }
/// }
///
/// # fn main() -> Result<(), dermatch_core::UserProfileError> {
/// let product = Product::new("p1", "Hydra Serum", "DermaLab")
///     .with_base_match_score(40.0);
/// let profile = UserProfile::new(SkinType::Dry, Climate::Cold, 30, 0.8)?;
/// assert_eq!(BaselineScorer.score(&product, &profile), 40.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `product` according to `profile`.
    fn score(&self, product: &Product, profile: &UserProfile) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }
}
