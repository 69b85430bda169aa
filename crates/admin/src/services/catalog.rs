//! Vehicle catalog: browsing, filtering and stock keeping.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use autopos_core::{Price, ProductId};

use crate::db::{self, KeyValueStore, StorageError, keys};
use crate::models::Product;

/// Ordering applied to a filtered catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest model year first.
    #[default]
    Latest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortOrder {
    /// Stable spelling used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            other => Err(format!(
                "unknown sort order '{other}' (expected latest, price-low or price-high)"
            )),
        }
    }
}

/// Criteria for narrowing the catalog. Every criterion is optional; the
/// default filter matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring over make, model and VIN.
    pub search: String,
    /// Keep products offering at least one of these colors.
    pub colors: Vec<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub min_year: Option<u16>,
    pub max_year: Option<u16>,
    /// Exact make, compared case-insensitively.
    pub make: Option<String>,
    pub sort: SortOrder,
}

impl CatalogFilter {
    /// Whether `product` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || product.make.to_lowercase().contains(&needle)
            || product.model.to_lowercase().contains(&needle)
            || product.vin.to_lowercase().contains(&needle);

        let color_ok = self.colors.is_empty()
            || self
                .colors
                .iter()
                .any(|wanted| product.colors.iter().any(|c| c.eq_ignore_ascii_case(wanted)));

        let price_ok = self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max);
        let year_ok = self.min_year.is_none_or(|min| product.year >= min)
            && self.max_year.is_none_or(|max| product.year <= max);
        let make_ok = self
            .make
            .as_deref()
            .is_none_or(|make| product.make.eq_ignore_ascii_case(make));

        text_ok && color_ok && price_ok && year_ok && make_ok
    }
}

/// In-memory catalog backed by the `cars` document.
pub struct Catalog {
    storage: Arc<dyn KeyValueStore>,
    products: Vec<Product>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Load the catalog. Missing or malformed data yields an empty catalog.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let products = db::read_json(storage.as_ref(), keys::CARS).unwrap_or_default();
        Self { storage, products }
    }

    /// All products in stored order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the whole catalog and save it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog could not be saved.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), StorageError> {
        self.products = products;
        self.persist()
    }

    /// Take up to `quantity` units of `id` from stock, in memory only.
    ///
    /// Returns the units actually taken, or `None` if the product is unknown.
    /// Call [`Catalog::persist`] once the batch of changes is complete.
    pub fn decrement_stock(&mut self, id: &ProductId, quantity: u32) -> Option<u32> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == *id) else {
            warn!(product_id = %id, "Stock decrement for unknown product");
            return None;
        };

        let taken = product.take_stock(quantity);
        if taken < quantity {
            warn!(
                product_id = %id,
                requested = quantity,
                taken,
                "Stock exhausted; decrement floored at zero"
            );
        }
        debug!(product_id = %id, stock = product.stock, "Stock decremented");
        Some(taken)
    }

    /// Save the catalog as it stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog could not be saved.
    pub fn persist(&self) -> Result<(), StorageError> {
        db::write_json(self.storage.as_ref(), keys::CARS, &self.products)
    }

    /// Products matching `filter`, ordered by its sort order.
    #[instrument(skip(self), fields(total = self.products.len()))]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Product> {
        let mut matched: Vec<&Product> = self.products.iter().filter(|p| filter.matches(p)).collect();
        match filter.sort {
            SortOrder::Latest => matched.sort_by(|a, b| b.year.cmp(&a.year)),
            SortOrder::PriceLow => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHigh => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        debug!(matched = matched.len(), "Catalog filtered");
        matched
    }

    /// Every color offered by some product, in first-seen order.
    #[must_use]
    pub fn available_colors(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.colors.iter().map(String::as_str)))
    }

    /// Every make in the catalog, in first-seen order.
    #[must_use]
    pub fn available_makes(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.make.as_str()))
    }

    /// Products with stock at or below `threshold`.
    #[must_use]
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::fixtures;

    fn catalog() -> Catalog {
        let mut corolla = fixtures::product("P1", "Toyota", 19_900, &["red", "black"], 3);
        corolla.model = "Corolla".to_string();
        corolla.year = 2021;
        let mut civic = fixtures::product("P2", "Honda", 21_950, &["blue"], 1);
        civic.model = "Civic".to_string();
        civic.year = 2023;
        let mut model3 = fixtures::product("P3", "Tesla", 38_990, &["white", "red"], 0);
        model3.model = "Model 3".to_string();
        model3.year = 2022;

        let storage = Arc::new(MemoryStore::new());
        let mut catalog = Catalog::hydrate(storage);
        catalog.replace_all(vec![corolla, civic, model3]).unwrap();
        catalog
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_filter_sorts_latest_first() {
        let catalog = catalog();
        let listed = catalog.filter(&CatalogFilter::default());
        assert_eq!(ids(&listed), ["P2", "P3", "P1"]);
    }

    #[test]
    fn test_search_covers_make_model_and_vin() {
        let catalog = catalog();
        let by_model = CatalogFilter {
            search: "corol".to_string(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&by_model)), ["P1"]);

        let by_vin = CatalogFilter {
            search: "vin-p3".to_string(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&by_vin)), ["P3"]);
    }

    #[test]
    fn test_color_price_year_and_make_filters() {
        let catalog = catalog();
        let red = CatalogFilter {
            colors: vec!["Red".to_string()],
            sort: SortOrder::PriceLow,
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&red)), ["P1", "P3"]);

        let mid_price = CatalogFilter {
            min_price: Some(Price::from_units(20_000)),
            max_price: Some(Price::from_units(30_000)),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&mid_price)), ["P2"]);

        let years = CatalogFilter {
            min_year: Some(2022),
            sort: SortOrder::PriceHigh,
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&years)), ["P3", "P2"]);

        let make = CatalogFilter {
            make: Some("toyota".to_string()),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&catalog.filter(&make)), ["P1"]);
    }

    #[test]
    fn test_sort_order_parses() {
        assert_eq!("price-low".parse::<SortOrder>().unwrap(), SortOrder::PriceLow);
        assert_eq!("LATEST".parse::<SortOrder>().unwrap(), SortOrder::Latest);
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_available_colors_and_makes() {
        let catalog = catalog();
        assert_eq!(catalog.available_colors(), ["red", "black", "blue", "white"]);
        assert_eq!(catalog.available_makes(), ["Toyota", "Honda", "Tesla"]);
    }

    #[test]
    fn test_low_stock() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.low_stock(1)), ["P2", "P3"]);
    }

    #[test]
    fn test_decrement_stock_floors_and_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut catalog = Catalog::hydrate(storage.clone());
        catalog
            .replace_all(vec![fixtures::product("P1", "Toyota", 19_900, &["red"], 2)])
            .unwrap();

        assert_eq!(catalog.decrement_stock(&ProductId::new("P1"), 5), Some(2));
        assert_eq!(catalog.decrement_stock(&ProductId::new("nope"), 1), None);
        catalog.persist().unwrap();

        let reloaded = Catalog::hydrate(storage);
        assert_eq!(reloaded.find(&ProductId::new("P1")).unwrap().stock, 0);
    }
}
