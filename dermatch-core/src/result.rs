//! Ranked match output returned to callers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// Maximum number of explanation strings carried per match.
///
/// The UI renders at most three bullet points per product card, so longer
/// lists are truncated at construction in rule-evaluation order.
pub const MAX_EXPLANATIONS: usize = 3;

/// One scored product, with human-readable explanations.
///
/// `reasons` and `predicted_results` are deduplicated and capped at
/// [`MAX_EXPLANATIONS`], preserving the order scoring rules fired. They are
/// presentation hints only; ranking uses `score` alone.
///
/// # Examples
/// ```
/// use dermatch_core::{MatchResult, ProductId};
///
/// let result = MatchResult::new(ProductId::new("p1"), 87.0)
///     .with_reasons(["Targets your acne concern"]);
/// assert_eq!(result.score, 87.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult {
    /// Scored product.
    pub product_id: ProductId,
    /// Compatibility or relevance score, clamped into `0.0..=100.0`.
    pub score: f32,
    /// Why the product matched, in rule-evaluation order.
    pub reasons: Vec<String>,
    /// Expected outcomes, in rule-evaluation order.
    pub predicted_results: Vec<String>,
}

impl MatchResult {
    /// Construct a result with empty explanation lists.
    ///
    /// The score is clamped into `0.0..=100.0`; non-finite input maps to
    /// `0.0`.
    #[must_use]
    pub fn new(product_id: ProductId, score: f32) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            product_id,
            score,
            reasons: Vec::new(),
            predicted_results: Vec::new(),
        }
    }

    /// Replace the reasons while returning `self` for chaining.
    #[must_use]
    pub fn with_reasons<I, S>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reasons = cap_explanations(reasons);
        self
    }

    /// Replace the predicted results while returning `self` for chaining.
    #[must_use]
    pub fn with_predicted_results<I, S>(mut self, predicted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicted_results = cap_explanations(predicted);
        self
    }
}

/// Deduplicate and cap an explanation list, keeping first-seen order.
fn cap_explanations<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        if out.len() == MAX_EXPLANATIONS {
            break;
        }
        let entry = entry.into();
        if !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}
