//! Recommendation orchestration: the single entry point combining profile
//! analysis, match scoring, and search ranking over a product catalog.
//!
//! The [`Recommender`] fetches the candidate pool from a
//! [`ProductStore`](dermatch_core::ProductStore), scores every product
//! according to the request's mode, and returns a ranked, truncated list of
//! [`MatchResult`](dermatch_core::MatchResult)s. Scoring individual products
//! is pure and independent, so the per-product loop could fan out across
//! threads; the final merge uses a stable sort so score ties keep catalog
//! order either way.
//!
//! Each call is independent: the recommender holds no caches and no mutable
//! state, so identical requests against an unchanged catalog yield identical
//! output.

#![forbid(unsafe_code)]

use log::debug;
use thiserror::Error;

use dermatch_core::{
    MatchResult, Product, ProductFilter, ProductStore, Scorer, StoreError, UserProfile,
};
use dermatch_scorer::{MatchScorer, SearchQuery, SearchRanker};

/// Default result-list length when the caller does not set one.
pub const DEFAULT_LIMIT: usize = 10;

/// Parameters for one recommendation call.
///
/// `profile` and `query` select the scoring mode: profile-only uses match
/// scoring, query-only uses search ranking, both blend the two, and neither
/// falls back to the catalog's own ordering.
///
/// # Examples
/// ```
/// use dermatch_recommend::RecommendationRequest;
///
/// let request = RecommendationRequest::new().with_query("vitamin c").with_limit(5);
/// assert_eq!(request.limit, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationRequest {
    /// Finalised skin profile, when the caller has one.
    pub profile: Option<UserProfile>,
    /// Raw search text; sanitised at the boundary. Input that is empty
    /// after sanitisation is treated as "no query supplied".
    pub query: Option<String>,
    /// Maximum results to return; defaults to [`DEFAULT_LIMIT`]. Zero is
    /// rejected as [`RecommendError::InvalidLimit`].
    pub limit: Option<usize>,
    /// Include products that scored zero. Off by default so empty matches
    /// do not pad the list.
    pub include_unscored: bool,
    /// Catalog narrowing applied before scoring.
    pub filter: ProductFilter,
}

impl RecommendationRequest {
    /// Construct an empty request (fallback-ordering mode).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile while returning `self` for chaining.
    #[must_use]
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the query text while returning `self` for chaining.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the result limit while returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep zero-score products while returning `self` for chaining.
    #[must_use]
    pub const fn with_unscored(mut self) -> Self {
        self.include_unscored = true;
        self
    }

    /// Set the catalog filter while returning `self` for chaining.
    #[must_use]
    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Errors returned by [`Recommender::recommend`].
///
/// An empty result list is a successful outcome, not an error; only
/// structural failures surface here so callers can distinguish "no matches"
/// from "request failed".
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The requested limit was zero.
    #[error("limit must be positive")]
    InvalidLimit,
    /// The product catalog could not be fetched.
    #[error("failed to fetch product catalog")]
    FetchFailed {
        /// Source error from the catalog collaborator.
        #[source]
        source: StoreError,
    },
}

/// Stateless recommendation service over a product store.
///
/// # Examples
/// ```
/// use dermatch_core::{MemoryProductStore, Product};
/// use dermatch_recommend::{RecommendationRequest, Recommender};
///
/// let store = MemoryProductStore::with_product(
///     Product::new("p1", "Acne Gel", "DermaLab").with_base_match_score(20.0),
/// );
/// let recommender = Recommender::new(store);
/// let results = recommender
///     .recommend(&RecommendationRequest::new().with_query("acne"))
///     .expect("in-memory catalog is always reachable");
/// assert_eq!(results[0].product_id.as_str(), "p1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<S> {
    store: S,
    matcher: MatchScorer,
    ranker: SearchRanker,
}

impl<S: ProductStore> Recommender<S> {
    /// Construct a recommender with default scoring weights.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            matcher: MatchScorer::default(),
            ranker: SearchRanker::default(),
        }
    }

    /// Construct a recommender with custom scorers.
    #[must_use]
    pub const fn with_scorers(store: S, matcher: MatchScorer, ranker: SearchRanker) -> Self {
        Self {
            store,
            matcher,
            ranker,
        }
    }

    /// Produce a ranked, truncated recommendation list.
    ///
    /// Results are sorted by score descending; ties keep catalog order
    /// (stable sort). No product id appears twice. Zero-score products are
    /// dropped unless the request opts in.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidLimit`] for a zero limit and
    /// [`RecommendError::FetchFailed`] when the catalog collaborator fails;
    /// a fetch failure is never converted into an empty success.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<MatchResult>, RecommendError> {
        let limit = match request.limit {
            Some(0) => return Err(RecommendError::InvalidLimit),
            Some(limit) => limit,
            None => DEFAULT_LIMIT,
        };

        let products = self
            .store
            .find_products(&request.filter)
            .map_err(|source| RecommendError::FetchFailed { source })?;

        let query = request.query.as_deref().and_then(SearchQuery::parse);
        let mut results = match (&request.profile, &query) {
            (Some(profile), None) => self.score_by_profile(&products, profile),
            (None, Some(query)) => self.score_by_query(&products, query),
            (Some(profile), Some(query)) => self.score_blended(&products, profile, query),
            (None, None) => {
                // Degenerate but valid mode: pass the catalog through in its
                // own order, carrying stored baseline scores.
                debug!("recommend called without profile or query; using catalog order");
                return Ok(fallback_ordering(&products, limit, request.include_unscored));
            }
        };

        // Stable sort: equal scores keep catalog order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        if !request.include_unscored {
            results.retain(|result| result.score > 0.0);
        }
        dedup_by_id(&mut results);
        results.truncate(limit);
        debug!("recommend returning {} results", results.len());
        Ok(results)
    }

    fn score_by_profile(&self, products: &[Product], profile: &UserProfile) -> Vec<MatchResult> {
        products
            .iter()
            .map(|product| self.matcher.evaluate(product, profile))
            .collect()
    }

    fn score_by_query(&self, products: &[Product], query: &SearchQuery) -> Vec<MatchResult> {
        products
            .iter()
            .map(|product| {
                MatchResult::new(product.id.clone(), self.ranker.score(product, query))
            })
            .collect()
    }

    /// Blend both scoring modes with an arithmetic mean.
    ///
    /// The mean is this service's documented default policy for the combined
    /// mode; callers wanting a different combination can invoke the two
    /// scorers directly. Match-side reasons are kept.
    #[expect(
        clippy::float_arithmetic,
        reason = "the combined mode averages the two component scores"
    )]
    fn score_blended(
        &self,
        products: &[Product],
        profile: &UserProfile,
        query: &SearchQuery,
    ) -> Vec<MatchResult> {
        products
            .iter()
            .map(|product| {
                let mut evaluated = self.matcher.evaluate(product, profile);
                let search_score = self.ranker.score(product, query);
                evaluated.score =
                    <MatchScorer as Scorer>::sanitise(f32::midpoint(evaluated.score, search_score));
                evaluated
            })
            .collect()
    }
}

/// Catalog-order pass-through for requests with neither profile nor query.
///
/// Shares the scored modes' uniqueness guarantee: duplicate catalog rows
/// appear once, keeping the first occurrence.
fn fallback_ordering(products: &[Product], limit: usize, include_unscored: bool) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = products
        .iter()
        .map(|product| MatchResult::new(product.id.clone(), product.base_match_score))
        .filter(|result| include_unscored || result.score > 0.0)
        .collect();
    dedup_by_id(&mut results);
    results.truncate(limit);
    results
}

/// Drop later occurrences of already-seen product ids, preserving order.
fn dedup_by_id(results: &mut Vec<MatchResult>) {
    let mut seen = std::collections::HashSet::new();
    results.retain(|result| seen.insert(result.product_id.clone()));
}

#[cfg(test)]
mod tests;
