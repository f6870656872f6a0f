//! Behaviour coverage for the recommendation entry point.

use rstest::{fixture, rstest};

use dermatch_core::{
    Climate, MemoryProductStore, Product, ProductFilter, SkinType, UserProfile,
    test_support::{FailingStore, sample_catalog},
};

use super::{DEFAULT_LIMIT, RecommendError, RecommendationRequest, Recommender};

#[fixture]
fn recommender() -> Recommender<MemoryProductStore> {
    Recommender::new(MemoryProductStore::with_products(sample_catalog()))
}

fn oily_profile() -> UserProfile {
    UserProfile::new(SkinType::Oily, Climate::Humid, 22, 0.9)
        .expect("valid profile")
        .with_concerns(["acne", "oily_skin", "pore_control"])
}

#[rstest]
fn profile_mode_ranks_concern_matches_first(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new().with_profile(oily_profile());
    let results = recommender.recommend(&request).expect("catalog reachable");

    assert_eq!(results[0].product_id.as_str(), "p-acne");
    assert!(!results[0].reasons.is_empty());
    // Scores descend.
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[rstest]
fn query_mode_rewards_name_hits(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new().with_query("acne");
    let results = recommender.recommend(&request).expect("catalog reachable");

    assert_eq!(results[0].product_id.as_str(), "p-acne");
    // Query-only mode attaches no match reasons.
    assert!(results[0].reasons.is_empty());
}

#[rstest]
fn combined_mode_averages_component_scores() {
    let store = MemoryProductStore::with_product(
        Product::new("p1", "Acne Gel", "DermaLab")
            .with_benefits(["acne-fighting"])
            .with_base_match_score(40.0),
    );
    let recommender = Recommender::new(store);

    let profile_only = recommender
        .recommend(&RecommendationRequest::new().with_profile(oily_profile()))
        .expect("catalog reachable");
    let query_only = recommender
        .recommend(&RecommendationRequest::new().with_query("acne"))
        .expect("catalog reachable");
    let combined = recommender
        .recommend(
            &RecommendationRequest::new()
                .with_profile(oily_profile())
                .with_query("acne"),
        )
        .expect("catalog reachable");

    let expected = f32::midpoint(profile_only[0].score, query_only[0].score);
    assert_eq!(combined[0].score, expected);
}

#[rstest]
fn empty_query_falls_back_to_catalog_order(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new().with_query("   ");
    let results = recommender.recommend(&request).expect("catalog reachable");

    // Catalog order, not a fully-scored-as-zero list; the zero-baseline
    // product is dropped.
    let ids: Vec<&str> = results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p-acne", "p-hydra", "p-retinol"]);
    assert_eq!(results[0].score, 50.0);
}

#[rstest]
fn fallback_keeps_zero_scores_when_opted_in(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new().with_unscored();
    let results = recommender.recommend(&request).expect("catalog reachable");
    let ids: Vec<&str> = results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p-acne", "p-hydra", "p-retinol", "p-plain"]);
}

#[rstest]
fn fetch_failure_surfaces_as_an_error() {
    let recommender = Recommender::new(FailingStore);
    let err = recommender
        .recommend(&RecommendationRequest::new().with_query("acne"))
        .expect_err("fetch failure must not become an empty success");
    assert!(matches!(err, RecommendError::FetchFailed { .. }));
}

#[rstest]
fn zero_limit_is_rejected_before_scoring() {
    let recommender = Recommender::new(FailingStore);
    let err = recommender
        .recommend(&RecommendationRequest::new().with_limit(0))
        .expect_err("zero limit is invalid");
    // InvalidLimit wins over FetchFailed: validation happens first.
    assert!(matches!(err, RecommendError::InvalidLimit));
}

#[rstest]
fn limit_truncates_the_ranked_list(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new()
        .with_profile(oily_profile())
        .with_limit(1);
    let results = recommender.recommend(&request).expect("catalog reachable");
    assert_eq!(results.len(), 1);
}

#[rstest]
fn default_limit_applies_when_unset() {
    let products: Vec<Product> = (0..20)
        .map(|i| {
            Product::new(format!("p{i}"), "Balm", "Brand").with_base_match_score(10.0)
        })
        .collect();
    let recommender = Recommender::new(MemoryProductStore::with_products(products));
    let results = recommender
        .recommend(&RecommendationRequest::new().with_query("balm"))
        .expect("catalog reachable");
    assert_eq!(results.len(), DEFAULT_LIMIT);
}

#[rstest]
fn equal_scores_keep_catalog_order() {
    let products = vec![
        Product::new("first", "Twin Balm", "Brand").with_base_match_score(10.0),
        Product::new("second", "Twin Balm", "Brand").with_base_match_score(10.0),
        Product::new("third", "Twin Balm", "Brand").with_base_match_score(10.0),
    ];
    let recommender = Recommender::new(MemoryProductStore::with_products(products));
    let results = recommender
        .recommend(&RecommendationRequest::new().with_query("twin"))
        .expect("catalog reachable");
    let ids: Vec<&str> = results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[rstest]
fn duplicate_catalog_rows_appear_once() {
    let duplicate = Product::new("dup", "Twin Balm", "Brand").with_base_match_score(10.0);
    let recommender = Recommender::new(MemoryProductStore::with_products(vec![
        duplicate.clone(),
        duplicate,
    ]));
    let results = recommender
        .recommend(&RecommendationRequest::new().with_query("twin"))
        .expect("catalog reachable");
    assert_eq!(results.len(), 1);

    // The fallback mode shares the uniqueness guarantee.
    let fallback = recommender
        .recommend(&RecommendationRequest::new())
        .expect("catalog reachable");
    assert_eq!(fallback.len(), 1);
    assert_eq!(fallback[0].product_id.as_str(), "dup");
}

#[rstest]
fn no_matches_is_an_empty_success() {
    // Zero-baseline catalog: a miss scores zero and is filtered out.
    let recommender = Recommender::new(MemoryProductStore::with_product(Product::new(
        "p1",
        "Plain Balm",
        "NoName",
    )));
    let results = recommender
        .recommend(&RecommendationRequest::new().with_query("xyzzy"))
        .expect("no matches is not an error");
    assert!(results.is_empty());
}

#[rstest]
fn identical_requests_yield_identical_output(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new()
        .with_profile(oily_profile())
        .with_query("gel");
    let first = recommender.recommend(&request).expect("catalog reachable");
    let second = recommender.recommend(&request).expect("catalog reachable");
    assert_eq!(first, second);
}

#[rstest]
fn filter_narrows_the_candidate_pool(recommender: Recommender<MemoryProductStore>) {
    let request = RecommendationRequest::new()
        .with_profile(oily_profile())
        .with_filter(ProductFilter::new().with_category("serum"));
    let results = recommender.recommend(&request).expect("catalog reachable");
    let ids: Vec<&str> = results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p-hydra"]);
}
