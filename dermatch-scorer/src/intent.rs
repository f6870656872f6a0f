//! Keyword intent classification for the storefront chat widget.
//!
//! Only the classification layer is modelled here; response templating and
//! conversation state stay with the chat surface. Rules are evaluated in a
//! fixed priority order, so a message mentioning both "acne" and "routine"
//! resolves to the acne concern.

use dermatch_core::SkinType;

/// Skin concern topics the chat widget answers with product suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcernTopic {
    /// Breakouts and oil control.
    Acne,
    /// Dryness and dehydration.
    DrySkin,
    /// Wrinkles and loss of firmness.
    Aging,
    /// Redness and irritation.
    SensitiveSkin,
}

impl ConcernTopic {
    /// Concern terms used to search the catalog for this topic.
    ///
    /// Sensitive skin searches by marketed skin type instead; see
    /// [`ConcernTopic::skin_type`].
    #[must_use]
    pub const fn search_terms(self) -> &'static [&'static str] {
        match self {
            Self::Acne => &["acne", "oily_skin", "pore_control"],
            Self::DrySkin => &["dryness", "dehydration", "hydrating"],
            Self::Aging => &["aging", "wrinkles", "fine_lines"],
            Self::SensitiveSkin => &["sensitive_skin", "redness", "irritation"],
        }
    }

    /// The marketed skin type this topic narrows to, when it has one.
    #[must_use]
    pub const fn skin_type(self) -> Option<SkinType> {
        match self {
            Self::SensitiveSkin => Some(SkinType::Sensitive),
            _ => None,
        }
    }
}

/// Classified intent of one chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatIntent {
    /// The user described a skin concern.
    Concern(ConcernTopic),
    /// The user asked for product suggestions without naming a concern.
    ProductSearch,
    /// The user asked about ingredients.
    IngredientQuestion,
    /// The user asked about routine ordering or steps.
    RoutineQuestion,
    /// Anything else; answered with general guidance.
    General,
}

impl ChatIntent {
    /// Classify a chat message by keyword rules, first match wins.
    ///
    /// # Examples
    /// ```
    /// use dermatch_scorer::{ChatIntent, ConcernTopic};
    ///
    /// let intent = ChatIntent::classify("Help, another breakout before my trip!");
    /// assert_eq!(intent, ChatIntent::Concern(ConcernTopic::Acne));
    /// ```
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("acne") || has("pimple") || has("breakout") {
            Self::Concern(ConcernTopic::Acne)
        } else if has("dry") || has("moisture") || has("hydrat") {
            Self::Concern(ConcernTopic::DrySkin)
        } else if has("aging") || has("wrinkle") || has("anti-age") {
            Self::Concern(ConcernTopic::Aging)
        } else if has("sensitive") || has("irritat") {
            Self::Concern(ConcernTopic::SensitiveSkin)
        } else if has("product") && (has("find") || has("recommend") || has("suggest")) {
            Self::ProductSearch
        } else if has("ingredient") || (has("what") && has("contains")) {
            Self::IngredientQuestion
        } else if has("routine") || has("order") || has("steps") {
            Self::RoutineQuestion
        } else {
            Self::General
        }
    }
}
