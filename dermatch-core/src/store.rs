//! Data access traits for the product catalog.
//!
//! The `ProductStore` trait defines a read-only interface for retrieving
//! [`Product`] values. The engine treats whatever `find_products` returns as
//! the full candidate pool for a single recommendation call; incremental or
//! streaming scoring is out of scope.

use thiserror::Error;

use crate::{Product, ProductId};

/// Narrowing criteria for a catalog query.
///
/// All criteria are optional and conjunctive. An empty filter matches every
/// product.
///
/// # Examples
/// ```
/// use dermatch_core::ProductFilter;
///
/// let filter = ProductFilter::new().with_brand("DermaLab").with_max_price(40.0);
/// assert_eq!(filter.brand.as_deref(), Some("DermaLab"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilter {
    /// Restrict to a storefront category.
    pub category: Option<String>,
    /// Restrict to a brand, matched case-insensitively.
    pub brand: Option<String>,
    /// Restrict to products at or below this price.
    pub max_price: Option<f32>,
}

impl ProductFilter {
    /// Construct an empty filter matching every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a brand while returning `self` for chaining.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Restrict to a maximum price while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: f32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Report whether `product` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let matched = product
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category));
            if !matched {
                return false;
            }
        }
        if let Some(brand) = &self.brand
            && !product.brand.eq_ignore_ascii_case(brand)
        {
            return false;
        }
        if let Some(max_price) = self.max_price
            && product.price > max_price
        {
            return false;
        }
        true
    }
}

/// Errors raised by catalog access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The upstream catalog source could not be reached.
    ///
    /// Callers must surface this rather than treating it as an empty result;
    /// "no matches" and "request failed" are distinct outcomes.
    #[error("product catalog unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the upstream failure.
        reason: String,
    },
}

impl StoreError {
    /// Construct an [`StoreError::Unavailable`] with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Read-only access to the product catalog.
///
/// Implementations must preserve a stable catalog order across identical
/// queries: the recommender breaks score ties by input order, so a store
/// that reorders rows between calls would break output determinism.
pub trait ProductStore: Send + Sync {
    /// Return all products satisfying `filter`, in catalog order.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] when the catalog source cannot be
    /// reached. An empty result is a successful outcome, not an error.
    fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Return the product with the given id, when present.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] when the catalog source cannot be
    /// reached.
    fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;
}

/// In-memory `ProductStore` backed by a `Vec`.
///
/// The store performs a linear scan and preserves insertion order, which
/// doubles as the catalog order for tie-breaking. It backs the CLI's
/// JSON-loaded catalogs and the test suites.
///
/// # Examples
/// ```
/// use dermatch_core::{MemoryProductStore, Product, ProductFilter, ProductStore};
///
/// let store = MemoryProductStore::with_products(vec![
///     Product::new("p1", "Gel", "DermaLab"),
/// ]);
/// let found = store.find_products(&ProductFilter::new()).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    products: Vec<Product>,
}

impl MemoryProductStore {
    /// Create a store containing a single product.
    #[must_use]
    pub fn with_product(product: Product) -> Self {
        Self::with_products(std::iter::once(product))
    }

    /// Create a store from a collection of products, preserving order.
    #[must_use]
    pub fn with_products<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// Return the number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Report whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for MemoryProductStore {
    fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> MemoryProductStore {
        MemoryProductStore::with_products(vec![
            Product::new("p1", "Clear Gel", "DermaLab")
                .with_category("cleanser")
                .with_price(18.0),
            Product::new("p2", "Hydra Serum", "Aquaform")
                .with_category("serum")
                .with_price(42.0),
        ])
    }

    #[rstest]
    fn empty_filter_returns_catalog_order(catalog: MemoryProductStore) {
        let found = catalog
            .find_products(&ProductFilter::new())
            .expect("in-memory store never fails");
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[rstest]
    fn filter_narrows_by_brand_case_insensitively(catalog: MemoryProductStore) {
        let found = catalog
            .find_products(&ProductFilter::new().with_brand("dermalab"))
            .expect("in-memory store never fails");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "p1");
    }

    #[rstest]
    fn filter_narrows_by_price_ceiling(catalog: MemoryProductStore) {
        let found = catalog
            .find_products(&ProductFilter::new().with_max_price(20.0))
            .expect("in-memory store never fails");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "p1");
    }

    #[rstest]
    fn get_product_finds_by_id(catalog: MemoryProductStore) {
        let product = catalog
            .get_product(&ProductId::new("p2"))
            .expect("in-memory store never fails");
        assert_eq!(product.map(|p| p.name), Some("Hydra Serum".to_owned()));
    }

    #[rstest]
    fn get_product_returns_none_for_unknown_id(catalog: MemoryProductStore) {
        let product = catalog
            .get_product(&ProductId::new("missing"))
            .expect("in-memory store never fails");
        assert!(product.is_none());
    }
}
