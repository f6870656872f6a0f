//! Cross-module properties: clamping, monotonicity, and determinism over
//! generated inputs.

use proptest::prelude::*;

use dermatch_core::{Climate, Product, Scorer, SkinType, UserProfile};

use crate::{MatchScorer, SearchQuery, SearchRanker};

const SKIN_TYPES: [SkinType; 5] = [
    SkinType::Normal,
    SkinType::Oily,
    SkinType::Dry,
    SkinType::Combination,
    SkinType::Sensitive,
];

const CONCERN_POOL: [&str; 6] = [
    "acne",
    "aging",
    "dryness",
    "brightening",
    "pore_control",
    "redness",
];

const BENEFIT_POOL: [&str; 6] = [
    "acne-fighting",
    "anti-aging",
    "hydrating",
    "brightening",
    "pore control",
    "barrier repair",
];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        -50.0f32..200.0,
        proptest::option::of(0.0f32..100.0),
        proptest::option::of(0.0f32..5.0),
        proptest::option::of(0.0f32..10.0),
        proptest::sample::subsequence(BENEFIT_POOL.to_vec(), 0..BENEFIT_POOL.len()),
        proptest::sample::subsequence(
            vec!["Oily", "Dry", "Normal", "All Types"],
            0..4,
        ),
    )
        .prop_map(|(base, clinical, satisfaction, ppr, benefits, skin_types)| {
            let mut product = Product::new("p", "Test Product", "Test Brand")
                .with_description("generated")
                .with_benefits(benefits)
                .with_skin_types(skin_types)
                .with_base_match_score(base);
            product.clinical_evidence_score = clinical;
            product.user_satisfaction_score = satisfaction;
            product.price_performance_ratio = ppr;
            product
        })
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        proptest::sample::select(SKIN_TYPES.to_vec()),
        proptest::sample::subsequence(CONCERN_POOL.to_vec(), 0..CONCERN_POOL.len()),
        1u32..90,
    )
        .prop_map(|(skin_type, concerns, age)| {
            UserProfile::new(skin_type, Climate::Temperate, age, 0.8)
                .expect("generated profile is valid")
                .with_concerns(concerns)
        })
}

proptest! {
    #[test]
    fn match_scores_stay_in_range(product in arb_product(), profile in arb_profile()) {
        let score = MatchScorer::default().score(&product, &profile);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn search_scores_stay_in_range(product in arb_product(), raw in "[a-z]{1,12}") {
        if let Some(query) = SearchQuery::parse(&raw) {
            let score = SearchRanker::default().score(&product, &query);
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn extra_matching_benefit_never_lowers_the_match_score(
        product in arb_product(),
        profile in arb_profile(),
    ) {
        prop_assume!(!profile.concerns.is_empty());
        let scorer = MatchScorer::default();
        let before = scorer.score(&product, &profile);

        // Append a benefit tag containing the first concern verbatim.
        let mut richer = product.clone();
        let first_concern = profile.concerns[0].clone();
        richer.benefits.push(format!("{first_concern} booster"));
        let after = scorer.score(&richer, &profile);

        prop_assert!(after >= before);
    }

    #[test]
    fn scoring_twice_yields_identical_results(
        product in arb_product(),
        profile in arb_profile(),
    ) {
        let scorer = MatchScorer::default();
        prop_assert_eq!(
            scorer.evaluate(&product, &profile),
            scorer.evaluate(&product, &profile)
        );
    }
}
