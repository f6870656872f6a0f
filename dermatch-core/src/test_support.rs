//! Test-only fixtures shared by unit tests across the workspace.

use crate::{Product, ProductFilter, ProductId, ProductStore, StoreError};

/// `ProductStore` that always reports the catalog as unavailable.
///
/// Used to exercise fetch-failure propagation: the recommender must surface
/// the failure instead of answering with an empty success.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl ProductStore for FailingStore {
    fn find_products(&self, _filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    fn get_product(&self, _id: &ProductId) -> Result<Option<Product>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// A small, varied sample catalog covering the scoring edge cases.
///
/// Catalog order is significant: tie-break tests rely on it.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("p-acne", "Clear Start Acne Gel", "DermaLab")
            .with_description("Salicylic acid gel for blemish-prone skin")
            .with_benefits(["acne-fighting", "pore control"])
            .with_skin_types(["Oily", "Combination"])
            .with_ingredients(["salicylic acid", "niacinamide"])
            .with_base_match_score(50.0)
            .with_clinical_evidence_score(85.0)
            .with_category("treatment")
            .with_price(24.0),
        Product::new("p-hydra", "Hydra Serum", "Aquaform")
            .with_description("Hyaluronic acid serum for deep hydration")
            .with_benefits(["hydrating", "barrier repair"])
            .with_skin_types(["Dry", "Normal"])
            .with_ingredients(["hyaluronic acid", "ceramides"])
            .with_base_match_score(45.0)
            .with_user_satisfaction_score(4.6)
            .with_category("serum")
            .with_price(42.0),
        Product::new("p-retinol", "Night Renewal Retinol", "DermaLab")
            .with_description("Anti-aging retinol treatment")
            .with_benefits(["anti-aging", "firmness"])
            .with_skin_types(["All Types"])
            .with_ingredients(["retinol", "peptides"])
            .with_base_match_score(40.0)
            .with_price_performance_ratio(8.5)
            .with_category("treatment")
            .with_price(55.0),
        Product::new("p-plain", "Plain Balm", "NoName")
            .with_description("Unremarkable balm")
            .with_price(9.0),
    ]
}
