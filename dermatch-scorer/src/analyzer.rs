//! Questionnaire analysis: raw answers to a classified skin profile.
//!
//! The analyzer is deliberately permissive. The questionnaire is a
//! best-effort quiz, so malformed or missing numeric answers fall back to
//! the scale midpoint rather than failing, and unknown climate strings fall
//! back to temperate. Analysis never returns an error.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use dermatch_core::{Climate, SkinType, UserProfile};

use crate::concerns::{expand_concerns, push_unique};

/// Midpoint fallback for missing or unparsable 0–10 scale answers.
const SCALE_DEFAULT: u8 = 5;

/// Upper bound of the questionnaire scales.
const SCALE_MAX: u8 = 10;

/// Raw questionnaire answers, prior to analysis.
///
/// Scale fields carry the raw text the form submitted; parsing happens
/// inside [`ProfileAnalyzer::analyze`] so that one permissive policy covers
/// every caller.
///
/// # Examples
/// ```
/// use dermatch_scorer::RawAnswers;
///
/// let answers = RawAnswers::new(22)
///     .with_oiliness("8")
///     .with_climate("tropical")
///     .with_concerns(["acne"]);
/// assert_eq!(answers.age, 22);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    /// Self-reported oiliness on a 0–10 scale, as submitted.
    pub oiliness: Option<String>,
    /// Self-reported sensitivity on a 0–10 scale, as submitted.
    pub sensitivity: Option<String>,
    /// Self-reported hydration on a 0–10 scale, as submitted.
    pub hydration: Option<String>,
    /// Ticked concern terms, possibly empty.
    pub concerns: Vec<String>,
    /// Age in years.
    pub age: u32,
    /// Self-reported climate, as submitted.
    pub climate: Option<String>,
    /// Lifestyle notes; unused by scoring, passed through for storage.
    pub lifestyle: Option<String>,
}

impl RawAnswers {
    /// Construct answers with only the age set.
    #[must_use]
    pub fn new(age: u32) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    /// Set the oiliness answer while returning `self` for chaining.
    #[must_use]
    pub fn with_oiliness(mut self, raw: impl Into<String>) -> Self {
        self.oiliness = Some(raw.into());
        self
    }

    /// Set the sensitivity answer while returning `self` for chaining.
    #[must_use]
    pub fn with_sensitivity(mut self, raw: impl Into<String>) -> Self {
        self.sensitivity = Some(raw.into());
        self
    }

    /// Set the hydration answer while returning `self` for chaining.
    #[must_use]
    pub fn with_hydration(mut self, raw: impl Into<String>) -> Self {
        self.hydration = Some(raw.into());
        self
    }

    /// Set the concern list while returning `self` for chaining.
    #[must_use]
    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns = concerns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the climate answer while returning `self` for chaining.
    #[must_use]
    pub fn with_climate(mut self, raw: impl Into<String>) -> Self {
        self.climate = Some(raw.into());
        self
    }
}

/// Stateless questionnaire classifier.
///
/// Instantiate per call or inject as a dependency; the analyzer holds no
/// mutable state, so identical answers always produce identical profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileAnalyzer;

impl ProfileAnalyzer {
    /// Construct an analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze raw answers into a finalised [`UserProfile`].
    ///
    /// Classification is a weighted composite over the three scale answers;
    /// the winning skin type is chosen in the fixed evaluation order dry,
    /// oily, sensitive, combination, normal, with the first maximum winning
    /// ties. That order is an explicit, documented policy.
    ///
    /// Concerns are expanded through the synonym table, then augmented with
    /// score-derived concerns (high oiliness, age over 30, low hydration,
    /// high sensitivity), deduplicated in first-seen order.
    #[must_use]
    pub fn analyze(&self, answers: &RawAnswers) -> UserProfile {
        let oiliness = parse_scale(answers.oiliness.as_deref());
        let sensitivity = parse_scale(answers.sensitivity.as_deref());
        let hydration = parse_scale(answers.hydration.as_deref());

        let (skin_type, confidence) = classify(oiliness, sensitivity, hydration);
        debug!(
            "classified skin type {skin_type} (confidence {confidence:.2}) \
             from oiliness={oiliness} sensitivity={sensitivity} hydration={hydration}"
        );

        let mut concerns = expand_concerns(answers.concerns.iter().map(String::as_str));
        if oiliness > 6 {
            push_unique(&mut concerns, "acne");
            push_unique(&mut concerns, "oily_skin");
        }
        if answers.age > 30 {
            push_unique(&mut concerns, "aging");
            push_unique(&mut concerns, "wrinkles");
        }
        if hydration < 4 {
            push_unique(&mut concerns, "dryness");
            push_unique(&mut concerns, "dehydration");
        }
        if sensitivity > 6 {
            push_unique(&mut concerns, "sensitive_skin");
            push_unique(&mut concerns, "redness");
        }

        let climate = answers
            .climate
            .as_deref()
            .and_then(|raw| Climate::from_str(raw).ok())
            .unwrap_or_default();

        UserProfile {
            skin_type,
            concerns,
            // The storefront quiz enforces a positive age; the floor guards
            // direct API callers without making analysis fallible.
            age: answers.age.max(1),
            climate,
            oiliness: Some(oiliness),
            sensitivity: Some(sensitivity),
            hydration: Some(hydration),
            confidence,
        }
    }
}

/// Parse a 0–10 scale answer, falling back to the midpoint for missing,
/// unparsable, or out-of-range values.
fn parse_scale(raw: Option<&str>) -> u8 {
    raw.and_then(|text| text.trim().parse::<u8>().ok())
        .filter(|value| *value <= SCALE_MAX)
        .unwrap_or(SCALE_DEFAULT)
}

/// Weighted composite classification over the three scale answers.
///
/// Returns the winning skin type and the classifier confidence, which is
/// floored at `0.0` (all composites can go negative) and capped at `0.95`.
#[expect(
    clippy::float_arithmetic,
    reason = "composite classification is defined over weighted float scores"
)]
fn classify(oiliness: u8, sensitivity: u8, hydration: u8) -> (SkinType, f32) {
    let oil = f32::from(oiliness);
    let sens = f32::from(sensitivity);
    let hyd = f32::from(hydration);

    let dry_score = (10.0 - hyd) + (5.0 - oil) * 0.7;
    let oily_score = oil + (10.0 - hyd) * 0.3;
    let sensitive_score = sens + if oiliness > 7 { -2.0 } else { 0.0 };
    let combination_score = if oiliness.abs_diff(hydration) > 3 {
        8.0
    } else {
        4.0
    };
    let normal_score = 6.0 - (oil - 5.0).abs() - (hyd - 5.0).abs();

    // Fixed evaluation order; first maximum wins ties.
    let candidates = [
        (SkinType::Dry, dry_score),
        (SkinType::Oily, oily_score),
        (SkinType::Sensitive, sensitive_score),
        (SkinType::Combination, combination_score),
        (SkinType::Normal, normal_score),
    ];
    let mut winner = SkinType::Dry;
    let mut max_score = f32::NEG_INFINITY;
    for (skin_type, score) in candidates {
        if score > max_score {
            winner = skin_type;
            max_score = score;
        }
    }

    let confidence = (0.6 + (max_score / 10.0) * 0.35).clamp(0.0, 0.95);
    (winner, confidence)
}

/// Routine guidance derived from a finalised profile.
///
/// These strings back the analysis summary screen; they are presentation
/// text, not scoring input.
#[must_use]
pub fn care_advice(profile: &UserProfile) -> Vec<String> {
    let mut advice: Vec<&str> = match profile.skin_type {
        SkinType::Oily => vec![
            "Use a gentle, oil-free cleanser twice daily",
            "Incorporate salicylic acid for pore control",
            "Choose lightweight, non-comedogenic moisturizers",
        ],
        SkinType::Dry => vec![
            "Use a cream-based cleanser to avoid stripping natural oils",
            "Apply hyaluronic acid serum on damp skin",
            "Use a rich moisturizer to restore barrier function",
        ],
        SkinType::Sensitive => vec![
            "Avoid fragrances and harsh actives",
            "Patch test new products before full application",
            "Use gentle, pH-balanced formulations",
        ],
        SkinType::Combination => vec![
            "Use different products for T-zone and cheek areas",
            "Consider dual-action formulations",
            "Balance oil control with hydration",
        ],
        SkinType::Normal => vec![
            "Maintain a consistent basic routine",
            "Focus on prevention with antioxidants",
            "Adjust products based on seasonal changes",
        ],
    };

    if profile.age > 30 {
        advice.push("Incorporate anti-aging ingredients like retinol");
        advice.push("Use products with peptides and antioxidants");
        advice.push("Consider professional treatments for enhanced results");
    }

    match profile.climate {
        Climate::Humid | Climate::Tropical => {
            advice.push("Choose gel-based, lightweight formulations");
        }
        Climate::Dry | Climate::Cold => {
            advice.push("Use richer, more occlusive formulations");
        }
        Climate::Temperate => {}
    }

    advice.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn analyze(answers: &RawAnswers) -> UserProfile {
        ProfileAnalyzer::new().analyze(answers)
    }

    #[rstest]
    fn oily_answers_classify_as_oily() {
        // oily composite = 8 + 0.3 * 7 = 10.1, the strict maximum.
        let answers = RawAnswers::new(22)
            .with_oiliness("8")
            .with_hydration("3")
            .with_sensitivity("2")
            .with_climate("tropical")
            .with_concerns(["acne"]);
        let profile = analyze(&answers);

        assert_eq!(profile.skin_type, SkinType::Oily);
        assert_eq!(profile.climate, Climate::Tropical);
        for expected in ["acne", "oily_skin", "pore_control"] {
            assert!(
                profile.has_concern(expected),
                "expanded concerns should include {expected}"
            );
        }
    }

    #[rstest]
    fn low_hydration_classifies_as_dry() {
        let answers = RawAnswers::new(28)
            .with_oiliness("2")
            .with_hydration("1")
            .with_sensitivity("2");
        let profile = analyze(&answers);
        assert_eq!(profile.skin_type, SkinType::Dry);
        assert!(profile.has_concern("dryness"));
        assert!(profile.has_concern("dehydration"));
    }

    #[rstest]
    fn missing_scales_default_to_midpoint() {
        let profile = analyze(&RawAnswers::new(25));
        assert_eq!(profile.oiliness, Some(5));
        assert_eq!(profile.sensitivity, Some(5));
        assert_eq!(profile.hydration, Some(5));
    }

    #[rstest]
    #[case("abc")]
    #[case("11")]
    #[case("-3")]
    #[case("")]
    fn malformed_scales_default_to_midpoint(#[case] raw: &str) {
        let answers = RawAnswers::new(25).with_oiliness(raw);
        let profile = analyze(&answers);
        assert_eq!(profile.oiliness, Some(5));
    }

    #[rstest]
    fn unknown_climate_defaults_to_temperate() {
        let answers = RawAnswers::new(25).with_climate("lunar");
        assert_eq!(analyze(&answers).climate, Climate::Temperate);
    }

    #[rstest]
    fn age_over_thirty_derives_aging_concerns() {
        let profile = analyze(&RawAnswers::new(35));
        assert!(profile.has_concern("aging"));
        assert!(profile.has_concern("wrinkles"));
    }

    #[rstest]
    fn high_sensitivity_derives_redness_concerns() {
        let answers = RawAnswers::new(25).with_sensitivity("8");
        let profile = analyze(&answers);
        assert!(profile.has_concern("sensitive_skin"));
        assert!(profile.has_concern("redness"));
    }

    #[rstest]
    fn confidence_stays_within_bounds() {
        // Extreme answers push composites well past 10; confidence must cap.
        let answers = RawAnswers::new(25).with_oiliness("10").with_hydration("0");
        let profile = analyze(&answers);
        assert!(profile.confidence <= 0.95);
        assert!(profile.confidence >= 0.0);
    }

    #[rstest]
    fn analysis_is_idempotent() {
        let answers = RawAnswers::new(31)
            .with_oiliness("7")
            .with_hydration("4")
            .with_sensitivity("6")
            .with_concerns(["dullness", "acne"]);
        let first = analyze(&answers);
        let second = analyze(&answers);
        assert_eq!(first, second);
    }

    #[rstest]
    fn zero_age_floors_to_one() {
        let profile = analyze(&RawAnswers::new(0));
        assert_eq!(profile.age, 1);
    }

    #[rstest]
    fn advice_reflects_skin_type_age_and_climate() {
        let answers = RawAnswers::new(40)
            .with_oiliness("2")
            .with_hydration("1")
            .with_climate("cold");
        let profile = analyze(&answers);
        let advice = care_advice(&profile);
        assert!(advice.iter().any(|a| a.contains("hyaluronic acid")));
        assert!(advice.iter().any(|a| a.contains("retinol")));
        assert!(advice.iter().any(|a| a.contains("professional treatments")));
        assert!(advice.iter().any(|a| a.contains("occlusive")));
    }
}
