//! Wishlist entry type.

use crate::cart::CartItem;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A saved product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Product identifier, unique within the wishlist.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Price when saved.
    pub price: Price,
    /// Image reference.
    pub image: String,
    /// Product routing key.
    pub slug: String,
}

impl WishlistItem {
    /// Create a new wishlist entry.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: String::new(),
            slug: slug.into(),
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Build a cart line for this product with a fresh line id.
    pub fn to_cart_item(&self, quantity: i64) -> CartItem {
        CartItem::new(
            self.product_id.clone(),
            self.name.clone(),
            self.slug.clone(),
            self.price,
            quantity,
        )
        .with_image(self.image.clone())
    }
}
