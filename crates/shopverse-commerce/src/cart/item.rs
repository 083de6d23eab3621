//! Cart line item type.

use crate::ids::{LineItemId, ProductId, VariantId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// `id` identifies the line; `product_id` plus `variant_id` identify what is
/// being bought. The same product in two variants gives two lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference.
    pub image: String,
    /// Quantity.
    pub quantity: i64,
    /// Variant being purchased, if the product has variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    /// Variant name (e.g., "Large / Blue").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    /// Product routing key.
    pub slug: String,
}

impl CartItem {
    /// Create a new line item with a generated id and no variant.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Price,
        quantity: i64,
    ) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: String::new(),
            quantity,
            variant_id: None,
            variant_name: None,
            slug: slug.into(),
        }
    }

    /// Use an explicit line item id instead of a generated one.
    pub fn with_id(mut self, id: impl Into<LineItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, id: impl Into<VariantId>, name: impl Into<String>) -> Self {
        self.variant_id = Some(id.into());
        self.variant_name = Some(name.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Whether this line holds the same product and variant as `other`.
    ///
    /// An absent variant only matches another absent variant.
    pub fn same_purchase(&self, other: &CartItem) -> bool {
        self.product_id == other.product_id && self.variant_id == other.variant_id
    }

    /// Line total (price * quantity), unrounded.
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_purchase() {
        let plain = CartItem::new("p1", "Tee", "tee", Price::new(dec!(10)), 1);
        let plain_again = CartItem::new("p1", "Tee", "tee", Price::new(dec!(10)), 3);
        let large = plain.clone().with_variant("l", "Large");
        let other = CartItem::new("p2", "Cap", "cap", Price::new(dec!(5)), 1);

        assert!(plain.same_purchase(&plain_again));
        assert!(!plain.same_purchase(&large));
        assert!(large.same_purchase(&large.clone().with_id("other-line")));
        assert!(!plain.same_purchase(&other));
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new("p1", "Tee", "tee", Price::new(dec!(19.99)), 3);
        assert_eq!(item.line_total().amount(), dec!(59.97));
    }

    #[test]
    fn test_serialized_field_names() {
        let item = CartItem::new("p1", "Tee", "tee", Price::new(dec!(10)), 2)
            .with_id("line-1")
            .with_variant("m", "Medium")
            .with_image("/img/tee.png");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], "line-1");
        assert_eq!(value["productId"], "p1");
        assert_eq!(value["variantId"], "m");
        assert_eq!(value["variantName"], "Medium");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["slug"], "tee");
    }

    #[test]
    fn test_absent_variant_not_serialized() {
        let item = CartItem::new("p1", "Tee", "tee", Price::new(dec!(10)), 1);
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("variantId").is_none());
    }
}
