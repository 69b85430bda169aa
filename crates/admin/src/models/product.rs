//! Vehicles offered in the catalog.

use serde::{Deserialize, Serialize};

use autopos_core::{Price, ProductId, VehicleCondition};

/// A vehicle in the catalog.
///
/// Everything except `stock` is fixed once the product is listed; stock is
/// decremented by checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier (e.g. `C-0001`).
    pub id: ProductId,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: u16,
    /// Unit price in whole currency units.
    pub price: Price,
    /// Available color variants; the first one is the default.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Vehicle identification number.
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub condition: VehicleCondition,
    /// Odometer reading.
    #[serde(default)]
    pub mileage: u32,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub fuel_type: String,
}

impl Product {
    /// Display name, e.g. `Toyota Corolla`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Whether `color` is one of this product's variants.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Whether stock is at or below `threshold`.
    #[must_use]
    pub const fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }

    /// Remove `quantity` units from stock, stopping at zero.
    ///
    /// Returns the number of units actually removed.
    pub fn take_stock(&mut self, quantity: u32) -> u32 {
        let taken = quantity.min(self.stock);
        self.stock -= taken;
        taken
    }
}

/// The color variant used when none is chosen: the first listed color.
///
/// Returns `None` for products without color variants.
#[must_use]
pub fn default_color(product: &Product) -> Option<&str> {
    product.colors.first().map(String::as_str)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_default_color_is_first_listed() {
        let product = fixtures::product("C-1", "Toyota", 19_900, &["red", "black"], 3);
        assert_eq!(default_color(&product), Some("red"));

        let plain = fixtures::product("C-2", "Toyota", 19_900, &[], 3);
        assert_eq!(default_color(&plain), None);
    }

    #[test]
    fn test_take_stock_floors_at_zero() {
        let mut product = fixtures::product("C-1", "Toyota", 19_900, &["red"], 1);
        assert_eq!(product.take_stock(3), 1);
        assert_eq!(product.stock, 0);
        assert_eq!(product.take_stock(1), 0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_deserializes_stored_shape() {
        let json = r#"{
            "id": "C-0001", "make": "Toyota", "model": "Corolla", "year": 2021,
            "price": 19900, "colors": ["red", "black", "white"], "stock": 3,
            "images": ["https://example.com/1.jpg"], "vin": "VIN0001",
            "condition": "new", "mileage": 0, "transmission": "Automatic",
            "fuelType": "Gasoline"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "C-0001");
        assert_eq!(product.price, Price::from_units(19_900));
        assert_eq!(product.fuel_type, "Gasoline");
        assert!(product.offers_color("white"));
        assert!(!product.offers_color("green"));
        assert_eq!(product.display_name(), "Toyota Corolla");
    }
}
