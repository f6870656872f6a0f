//! Profile-to-product match scoring with human-readable explanations.

use thiserror::Error;

use dermatch_core::{MatchResult, Product, Scorer, UserProfile};

use crate::signals;

/// Tunable bonuses applied on top of a product's stored baseline score.
///
/// The defaults mirror the storefront's reference weighting. Raising
/// `benefit_bonus` never breaks the monotonicity guarantee: more overlapping
/// concerns and benefits never score lower than fewer, all else equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Bonus per profile concern matched by at least one benefit tag.
    pub benefit_bonus: f32,
    /// Bonus when the product is marketed for the profile's skin type.
    pub skin_type_bonus: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            benefit_bonus: 20.0,
            skin_type_bonus: 15.0,
        }
    }
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightError::Invalid`] when either value is negative or not
    /// finite.
    pub fn validate(self) -> Result<Self, WeightError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightError::Invalid)
        }
    }

    const fn is_valid(self) -> bool {
        self.benefit_bonus.is_finite()
            && self.skin_type_bonus.is_finite()
            && self.benefit_bonus >= 0.0
            && self.skin_type_bonus >= 0.0
    }
}

/// Errors raised when configuring scoring weights.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    /// A weight was negative or not finite.
    #[error("weights must be finite and non-negative")]
    Invalid,
}

/// Deterministic profile-to-product compatibility scorer.
///
/// Stateless: construct per call or share freely across threads. Missing
/// optional product fields contribute nothing; they are never an error.
///
/// # Examples
/// ```
/// use dermatch_core::{Climate, Product, Scorer, SkinType, UserProfile};
/// use dermatch_scorer::MatchScorer;
///
/// # fn main() -> Result<(), dermatch_core::UserProfileError> {
/// let product = Product::new("p1", "Clear Gel", "DermaLab")
///     .with_benefits(["acne-fighting"])
///     .with_base_match_score(50.0);
/// let profile = UserProfile::new(SkinType::Oily, Climate::Humid, 22, 0.9)?
///     .with_concerns(["acne"]);
/// let score = MatchScorer::default().score(&product, &profile);
/// assert_eq!(score, 70.0); // base 50 + one concern/benefit match
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    weights: MatchWeights,
}

impl MatchScorer {
    /// Construct a scorer with validated weights.
    ///
    /// # Errors
    /// Returns [`WeightError::Invalid`] when the weights are unusable.
    pub fn with_weights(weights: MatchWeights) -> Result<Self, WeightError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Score the pair and attach explanations for the UI.
    ///
    /// Reasons and predicted results are capped at three entries each,
    /// preserving rule-evaluation order; ranking reads the score alone.
    #[must_use]
    pub fn evaluate(&self, product: &Product, profile: &UserProfile) -> MatchResult {
        let score = self.score(product, profile);
        MatchResult::new(product.id.clone(), score)
            .with_reasons(self.reasons(product, profile))
            .with_predicted_results(predicted_results(product, profile, score))
    }

    /// Profile concerns matched by at least one benefit tag, in profile
    /// order.
    ///
    /// A concern matches when any benefit tag contains it as a
    /// case-insensitive substring, so "acne" matches "acne-fighting".
    fn matched_concerns<'p>(product: &Product, profile: &'p UserProfile) -> Vec<&'p str> {
        profile
            .concerns
            .iter()
            .filter(|concern| {
                let concern = concern.to_lowercase();
                !concern.is_empty()
                    && product
                        .benefits
                        .iter()
                        .any(|benefit| benefit.to_lowercase().contains(&concern))
            })
            .map(String::as_str)
            .collect()
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "concern counts are far below f32's integer precision limit"
    )]
    #[expect(
        clippy::float_arithmetic,
        reason = "match scoring sums weighted bonuses before the final clamp"
    )]
    fn raw_score(&self, product: &Product, profile: &UserProfile) -> f32 {
        let mut score = product.base_match_score;
        score += Self::matched_concerns(product, profile).len() as f32 * self.weights.benefit_bonus;
        if product.suits_skin_type(profile.skin_type) {
            score += self.weights.skin_type_bonus;
        }
        score += signals::quality_signal_bonus(product);
        score
    }

    fn reasons(&self, product: &Product, profile: &UserProfile) -> Vec<String> {
        let mut reasons = Vec::new();
        for concern in Self::matched_concerns(product, profile) {
            reasons.push(format!("Addresses your {concern} concern"));
        }
        if product.suits_skin_type(profile.skin_type) {
            reasons.push(format!("Formulated for {} skin", profile.skin_type));
        }
        if signals::clinical_evidence_bonus(product) > 0.0 {
            reasons.push("Backed by clinical evidence".to_owned());
        }
        if signals::satisfaction_bonus(product) > 0.0 {
            reasons.push("Highly rated by users".to_owned());
        }
        reasons
    }
}

impl Scorer for MatchScorer {
    fn score(&self, product: &Product, profile: &UserProfile) -> f32 {
        Self::sanitise(self.raw_score(product, profile))
    }
}

/// Expected-outcome strings keyed off which contributions fired.
///
/// Rule order matches the storefront's product cards; the caller caps the
/// list at three entries.
fn predicted_results(product: &Product, profile: &UserProfile, score: f32) -> Vec<String> {
    let mut results = Vec::new();
    if score > 80.0 {
        results.push("Excellent compatibility with your skin".to_owned());
    }
    if profile.has_concern("acne") && has_benefit(product, "acne-fighting") {
        results.push("Visible reduction in breakouts within 2-4 weeks".to_owned());
    }
    if profile.has_concern("aging") && has_benefit(product, "anti-aging") {
        results.push("Improved skin texture and firmness in 4-6 weeks".to_owned());
    }
    if profile.has_concern("dryness") && has_benefit(product, "hydrating") {
        results.push("Enhanced hydration levels within 1-2 weeks".to_owned());
    }
    if product
        .clinical_evidence_score
        .is_some_and(|clinical| clinical > 80.0)
    {
        results.push("Clinically proven ingredients for reliable results".to_owned());
    }
    results
}

fn has_benefit(product: &Product, tag: &str) -> bool {
    product
        .benefits
        .iter()
        .any(|benefit| benefit.to_lowercase().contains(tag))
}

/// Application-cadence guidance for a product.
///
/// Keyed off the catalog's `usage_frequency` column first, then name
/// keywords, with a generic default.
#[must_use]
pub fn usage_timeline(product: &Product) -> String {
    let name = product.name.to_lowercase();
    match product.usage_frequency.as_deref() {
        Some("twice-daily") => "Use morning and evening for optimal results".to_owned(),
        Some("weekly") => "Use 1-2 times per week as a treatment".to_owned(),
        _ if name.contains("serum") => "Apply daily in the evening, introduce gradually".to_owned(),
        _ if name.contains("moisturizer") => {
            "Use twice daily as the final step in your routine".to_owned()
        }
        _ => "Use daily as part of your skincare routine".to_owned(),
    }
}
