//! Catalog products and the subset of fields the scoring engine reads.
//!
//! Remaining storefront fields (images, stock, copy blocks) are opaque to the
//! engine and stay with the catalog collaborator.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SkinType;

/// Marketing label a catalog may use to advertise a product for every skin
/// type.
const WILDCARD_SKIN_TYPE: &str = "all types";

/// Unique product identifier.
///
/// Catalog identifiers are opaque strings (UUIDs in the hosted database), so
/// the newtype carries them verbatim.
///
/// # Examples
/// ```
/// use dermatch_core::ProductId;
///
/// let id = ProductId::new("prod-123");
/// assert_eq!(id.as_str(), "prod-123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A catalog product, narrowed to the fields scoring reads.
///
/// Optional quality signals contribute nothing when absent; they are never an
/// error. All scores the engine reports from this data are clamped into
/// `0.0..=100.0`.
///
/// # Examples
/// ```
/// use dermatch_core::Product;
///
/// let product = Product::new("p1", "Clear Start Gel", "DermaLab")
///     .with_benefits(["acne-fighting", "pore control"])
///     .with_base_match_score(40.0);
/// assert_eq!(product.base_match_score, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Marketing description.
    pub description: String,
    /// Benefit tags (e.g. "acne-fighting", "hydrating").
    pub benefits: Vec<String>,
    /// Skin types the product is marketed for; may contain the wildcard
    /// label "All Types".
    pub skin_types: Vec<String>,
    /// Ingredient names.
    pub ingredients: Vec<String>,
    /// Stored baseline score in `0.0..=100.0`; absent in the catalog maps
    /// to `0.0`.
    pub base_match_score: f32,
    /// Clinical evidence signal in `0.0..=100.0`, when published.
    pub clinical_evidence_score: Option<f32>,
    /// Review-derived satisfaction signal on a five-point scale.
    pub user_satisfaction_score: Option<f32>,
    /// Price-to-performance signal on a ten-point scale.
    pub price_performance_ratio: Option<f32>,
    /// Per-concern sub-scores in `0.0..=100.0`, keyed by concern term.
    pub concern_scores: BTreeMap<String, f32>,
    /// Retail price.
    pub price: f32,
    /// Storefront category, when assigned.
    pub category: Option<String>,
    /// Suggested application cadence (e.g. "twice-daily", "weekly").
    pub usage_frequency: Option<String>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: ProductId::new(""),
            name: String::new(),
            brand: String::new(),
            description: String::new(),
            benefits: Vec::new(),
            skin_types: Vec::new(),
            ingredients: Vec::new(),
            base_match_score: 0.0,
            clinical_evidence_score: None,
            user_satisfaction_score: None,
            price_performance_ratio: None,
            concern_scores: BTreeMap::new(),
            price: 0.0,
            category: None,
            usage_frequency: None,
        }
    }
}

impl Product {
    /// Construct a product with the identifying fields set.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            ..Self::default()
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the benefit tags while returning `self` for chaining.
    #[must_use]
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    /// Set the marketed skin types while returning `self` for chaining.
    #[must_use]
    pub fn with_skin_types<I, S>(mut self, skin_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skin_types = skin_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ingredient list while returning `self` for chaining.
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stored baseline score while returning `self` for chaining.
    #[must_use]
    pub fn with_base_match_score(mut self, score: f32) -> Self {
        self.base_match_score = score;
        self
    }

    /// Set the clinical evidence signal while returning `self` for chaining.
    #[must_use]
    pub const fn with_clinical_evidence_score(mut self, score: f32) -> Self {
        self.clinical_evidence_score = Some(score);
        self
    }

    /// Set the satisfaction signal while returning `self` for chaining.
    #[must_use]
    pub const fn with_user_satisfaction_score(mut self, score: f32) -> Self {
        self.user_satisfaction_score = Some(score);
        self
    }

    /// Set the price-performance signal while returning `self` for chaining.
    #[must_use]
    pub const fn with_price_performance_ratio(mut self, ratio: f32) -> Self {
        self.price_performance_ratio = Some(ratio);
        self
    }

    /// Insert a per-concern sub-score while returning `self` for chaining.
    #[must_use]
    pub fn with_concern_score(mut self, concern: impl Into<String>, score: f32) -> Self {
        self.concern_scores.insert(concern.into(), score);
        self
    }

    /// Set the retail price while returning `self` for chaining.
    #[must_use]
    pub fn with_price(mut self, price: f32) -> Self {
        self.price = price;
        self
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the usage cadence while returning `self` for chaining.
    #[must_use]
    pub fn with_usage_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.usage_frequency = Some(frequency.into());
        self
    }

    /// Report whether the product is marketed for `skin_type`.
    ///
    /// Labels are matched case-insensitively and the wildcard "All Types"
    /// matches every skin type. Absence of any label is not fatal; the
    /// product is simply a weaker match.
    ///
    /// # Examples
    /// ```
    /// use dermatch_core::{Product, SkinType};
    ///
    /// let product = Product::new("p1", "Balm", "DermaLab")
    ///     .with_skin_types(["All Types"]);
    /// assert!(product.suits_skin_type(SkinType::Dry));
    /// ```
    #[must_use]
    pub fn suits_skin_type(&self, skin_type: SkinType) -> bool {
        self.skin_types.iter().any(|label| {
            let label = label.to_lowercase();
            label == WILDCARD_SKIN_TYPE || label.contains(skin_type.as_str())
        })
    }
}
