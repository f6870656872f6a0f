//! Free-text relevance ranking, independent of any skin profile.

use dermatch_core::Product;

use crate::signals;

/// Maximum query length after sanitisation, in characters.
const MAX_QUERY_CHARS: usize = 100;

/// Characters stripped at the query boundary.
const STRIPPED: [char; 4] = ['<', '>', '"', '\''];

/// A sanitised, non-empty search query.
///
/// Construction is the boundary where raw storefront input is cleaned:
/// angle brackets and quotes are stripped, surrounding whitespace trimmed,
/// and over-long input truncated to 100 characters. Input that is empty
/// after sanitisation yields `None` — the "no query supplied" signal the
/// recommender maps to its fallback ordering, never an error.
///
/// # Examples
/// ```
/// use dermatch_scorer::SearchQuery;
///
/// let query = SearchQuery::parse("  acne serum  ").expect("non-empty after trimming");
/// assert_eq!(query.as_str(), "acne serum");
/// assert!(SearchQuery::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Sanitise raw input into a query, or `None` when nothing remains.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !STRIPPED.contains(c))
            .take(MAX_QUERY_CHARS)
            .collect();
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Return the sanitised query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for substring matching.
    pub(crate) fn lowered(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tunable bonuses for each relevance signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    /// Bonus when the query appears in the product name.
    pub name_bonus: f32,
    /// Bonus when the query appears in the brand.
    pub brand_bonus: f32,
    /// Bonus when the query appears in the description.
    pub description_bonus: f32,
    /// Bonus per marketed skin-type label containing the query.
    pub skin_type_bonus: f32,
    /// Bonus per benefit tag containing the query.
    pub benefit_bonus: f32,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            name_bonus: 30.0,
            brand_bonus: 20.0,
            description_bonus: 15.0,
            skin_type_bonus: 25.0,
            benefit_bonus: 20.0,
        }
    }
}

/// Deterministic query-to-product relevance scorer.
///
/// Matching is case-insensitive substring containment throughout. Per-entry
/// bonuses (skin types, benefits) apply once per matching entry and are not
/// capped per field; only the final total is clamped into `0.0..=100.0`.
///
/// # Examples
/// ```
/// use dermatch_core::Product;
/// use dermatch_scorer::{SearchQuery, SearchRanker};
///
/// let product = Product::new("p1", "Acne Control Gel", "DermaLab");
/// let query = SearchQuery::parse("acne").expect("non-empty");
/// assert_eq!(SearchRanker::default().score(&product, &query), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchRanker {
    weights: SearchWeights,
}

impl SearchRanker {
    /// Construct a ranker with custom weights.
    #[must_use]
    pub const fn with_weights(weights: SearchWeights) -> Self {
        Self { weights }
    }

    /// Score a product against a sanitised query.
    ///
    /// Starts from the product's stored baseline score; a product with no
    /// textual match and no structured signals scores exactly its baseline.
    #[expect(
        clippy::float_arithmetic,
        reason = "relevance scoring sums per-signal bonuses before the final clamp"
    )]
    #[must_use]
    pub fn score(&self, product: &Product, query: &SearchQuery) -> f32 {
        let needle = query.lowered();
        let mut score = product.base_match_score;

        if product.name.to_lowercase().contains(&needle) {
            score += self.weights.name_bonus;
        }
        if product.brand.to_lowercase().contains(&needle) {
            score += self.weights.brand_bonus;
        }
        if product.description.to_lowercase().contains(&needle) {
            score += self.weights.description_bonus;
        }
        for label in &product.skin_types {
            if label.to_lowercase().contains(&needle) {
                score += self.weights.skin_type_bonus;
            }
        }
        for benefit in &product.benefits {
            if benefit.to_lowercase().contains(&needle) {
                score += self.weights.benefit_bonus;
            }
        }
        // Structured per-concern sub-scores: a 0-100 value converts to a
        // 0-20 bonus.
        for (concern, value) in &product.concern_scores {
            if concern.to_lowercase().contains(&needle) && value.is_finite() {
                score += (value / 5.0).floor();
            }
        }
        score += signals::quality_signal_bonus(product);

        sanitise(score)
    }
}

fn sanitise(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn acne_product() -> Product {
        Product::new("p1", "Acne Control Gel", "DermaLab")
            .with_description("Targets blemishes and breakouts")
            .with_benefits(["acne-fighting", "pore control"])
            .with_skin_types(["Oily", "Acne-Prone"])
    }

    fn query(raw: &str) -> SearchQuery {
        SearchQuery::parse(raw).expect("non-empty query")
    }

    #[rstest]
    fn name_hit_earns_thirty(acne_product: Product) {
        // name +30, one skin-type label +25, one benefit +20
        let score = SearchRanker::default().score(&acne_product, &query("acne"));
        assert_eq!(score, 75.0);
    }

    #[rstest]
    fn brand_hit_earns_twenty(acne_product: Product) {
        let score = SearchRanker::default().score(&acne_product, &query("dermalab"));
        assert_eq!(score, 20.0);
    }

    #[rstest]
    fn no_match_scores_the_baseline() {
        let product = Product::new("p1", "Plain Balm", "NoName").with_base_match_score(12.0);
        let score = SearchRanker::default().score(&product, &query("retinol"));
        assert_eq!(score, 12.0);
    }

    #[rstest]
    fn no_match_without_baseline_scores_zero() {
        let product = Product::new("p1", "Plain Balm", "NoName");
        assert_eq!(SearchRanker::default().score(&product, &query("retinol")), 0.0);
    }

    #[rstest]
    fn per_entry_bonuses_apply_once_per_entry() {
        let product = Product::new("p1", "Balm", "NoName").with_skin_types(["Dry", "Very Dry"]);
        // Two matching labels, 25 each.
        assert_eq!(SearchRanker::default().score(&product, &query("dry")), 50.0);
    }

    #[rstest]
    fn concern_sub_score_converts_to_bonus() {
        let product = Product::new("p1", "Balm", "NoName").with_concern_score("acne", 87.0);
        // floor(87 / 5) = 17
        assert_eq!(SearchRanker::default().score(&product, &query("acne")), 17.0);
    }

    #[rstest]
    fn quality_signals_contribute(acne_product: Product) {
        let product = acne_product.with_clinical_evidence_score(85.0);
        let score = SearchRanker::default().score(&product, &query("acne"));
        assert_eq!(score, 90.0);
    }

    #[rstest]
    fn total_clamps_at_one_hundred(acne_product: Product) {
        let product = acne_product
            .with_base_match_score(60.0)
            .with_clinical_evidence_score(85.0);
        let score = SearchRanker::default().score(&product, &query("acne"));
        assert_eq!(score, 100.0);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("<>\"'")]
    fn blank_or_stripped_only_input_is_no_query(#[case] raw: &str) {
        assert!(SearchQuery::parse(raw).is_none());
    }

    #[rstest]
    fn parse_strips_markup_characters() {
        let q = query("<script>alert('acne')</script>");
        assert!(!q.as_str().contains('<'));
        assert!(!q.as_str().contains('\''));
    }

    #[rstest]
    fn parse_truncates_over_long_queries() {
        let raw = "a".repeat(250);
        let q = query(&raw);
        assert_eq!(q.as_str().chars().count(), 100);
    }

    #[rstest]
    fn ranking_is_deterministic(acne_product: Product) {
        let ranker = SearchRanker::default();
        let q = query("acne");
        assert_eq!(
            ranker.score(&acne_product, &q),
            ranker.score(&acne_product, &q)
        );
    }
}
