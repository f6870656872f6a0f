//! Tiered quality-signal bonuses shared by match scoring and search ranking.
//!
//! Each signal contributes the highest applicable tier only; the tiers do
//! not stack. Absent signals contribute nothing.

use dermatch_core::Product;

/// Clinical evidence tiers: >80 earns 15, >60 earns 10.
pub(crate) fn clinical_evidence_bonus(product: &Product) -> f32 {
    match product.clinical_evidence_score {
        Some(score) if score > 80.0 => 15.0,
        Some(score) if score > 60.0 => 10.0,
        _ => 0.0,
    }
}

/// User satisfaction tiers on the five-point scale: >4.5 earns 10, >4.0
/// earns 5.
pub(crate) fn satisfaction_bonus(product: &Product) -> f32 {
    match product.user_satisfaction_score {
        Some(score) if score > 4.5 => 10.0,
        Some(score) if score > 4.0 => 5.0,
        _ => 0.0,
    }
}

/// Price-performance tiers on the ten-point scale: >8.0 earns 10, >7.0
/// earns 5.
pub(crate) fn price_performance_bonus(product: &Product) -> f32 {
    match product.price_performance_ratio {
        Some(ratio) if ratio > 8.0 => 10.0,
        Some(ratio) if ratio > 7.0 => 5.0,
        _ => 0.0,
    }
}

/// Sum of all quality-signal bonuses for a product.
#[expect(
    clippy::float_arithmetic,
    reason = "signal bonuses are summed before the final clamp"
)]
pub(crate) fn quality_signal_bonus(product: &Product) -> f32 {
    clinical_evidence_bonus(product) + satisfaction_bonus(product) + price_performance_bonus(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(85.0, 15.0)]
    #[case(80.0, 10.0)] // boundary belongs to the lower tier
    #[case(65.0, 10.0)]
    #[case(60.0, 0.0)]
    fn clinical_tiers_are_exclusive(#[case] score: f32, #[case] expected: f32) {
        let product = Product::new("p", "n", "b").with_clinical_evidence_score(score);
        assert_eq!(clinical_evidence_bonus(&product), expected);
    }

    #[rstest]
    #[case(4.6, 10.0)]
    #[case(4.5, 5.0)]
    #[case(4.2, 5.0)]
    #[case(4.0, 0.0)]
    fn satisfaction_tiers_are_exclusive(#[case] score: f32, #[case] expected: f32) {
        let product = Product::new("p", "n", "b").with_user_satisfaction_score(score);
        assert_eq!(satisfaction_bonus(&product), expected);
    }

    #[rstest]
    #[case(8.5, 10.0)]
    #[case(7.5, 5.0)]
    #[case(7.0, 0.0)]
    fn price_performance_tiers_are_exclusive(#[case] ratio: f32, #[case] expected: f32) {
        let product = Product::new("p", "n", "b").with_price_performance_ratio(ratio);
        assert_eq!(price_performance_bonus(&product), expected);
    }

    #[rstest]
    fn absent_signals_contribute_nothing() {
        let product = Product::new("p", "n", "b");
        assert_eq!(quality_signal_bonus(&product), 0.0);
    }

    #[rstest]
    fn signals_sum_across_kinds() {
        let product = Product::new("p", "n", "b")
            .with_clinical_evidence_score(85.0)
            .with_user_satisfaction_score(4.6)
            .with_price_performance_ratio(8.5);
        assert_eq!(quality_signal_bonus(&product), 35.0);
    }
}
