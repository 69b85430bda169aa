//! Cart line items.

use serde::{Deserialize, Serialize};

use autopos_core::{Price, ProductId};

use super::Product;

/// One product variant pending purchase.
///
/// Serialized as the product's own fields plus `quantity` and
/// `selectedColor`. The product is a value snapshot taken when the line was
/// created, so later catalog edits do not reach into carts or orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
    pub selected_color: String,
}

impl CartLine {
    /// Create a line for `quantity` units of `product` in `color`.
    #[must_use]
    pub fn new(product: Product, color: impl Into<String>, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            selected_color: color.into(),
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    /// Whether this line is keyed by (`product_id`, `color`).
    #[must_use]
    pub fn is_keyed(&self, product_id: &ProductId, color: &str) -> bool {
        self.product.id == *product_id && self.selected_color == color
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_line_total() {
        let line = CartLine::new(
            fixtures::product("P1", "Toyota", 19_900, &["red"], 3),
            "red",
            2,
        );
        assert_eq!(line.line_total(), Price::from_units(39_800));
    }

    #[test]
    fn test_serializes_flat_with_selected_color() {
        let line = CartLine::new(
            fixtures::product("P1", "Toyota", 19_900, &["red", "blue"], 3),
            "blue",
            1,
        );
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], "P1");
        assert_eq!(json["make"], "Toyota");
        assert_eq!(json["selectedColor"], "blue");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["fuelType"], "Gasoline");

        let back: CartLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_is_keyed_by_product_and_color() {
        let line = CartLine::new(
            fixtures::product("P1", "Toyota", 19_900, &["red", "blue"], 3),
            "red",
            1,
        );
        assert!(line.is_keyed(&ProductId::new("P1"), "red"));
        assert!(!line.is_keyed(&ProductId::new("P1"), "blue"));
        assert!(!line.is_keyed(&ProductId::new("P2"), "red"));
    }
}
