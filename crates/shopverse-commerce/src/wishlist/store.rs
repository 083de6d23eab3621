//! Wishlist store.

use crate::ids::ProductId;
use crate::wishlist::WishlistItem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Saved products, at most one entry per product, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistStore {
    items: Vec<WishlistItem>,
}

impl WishlistStore {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product unless it is already saved.
    ///
    /// An existing entry is left untouched. Returns whether `item` was added.
    pub fn add_item(&mut self, item: WishlistItem) -> bool {
        if self.is_in_wishlist(&item.product_id) {
            return false;
        }
        debug!(product = %item.product_id, "added wishlist entry");
        self.items.push(item);
        true
    }

    /// Remove a product. Returns whether an entry was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(product = %product_id, "removed wishlist entry");
        }
        removed
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.remove_item(&item.product_id) {
            false
        } else {
            self.add_item(item)
        }
    }

    /// Check whether a product is saved.
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared wishlist");
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(feature = "storage")]
impl shopverse_storage::Persist for WishlistStore {
    const STORAGE_KEY: &'static str = "shopverse-wishlist";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;
    use rust_decimal_macros::dec;

    fn mug() -> WishlistItem {
        WishlistItem::new("p7", "Mug", "mug", Price::new(dec!(12.50)))
    }

    #[test]
    fn test_add_and_membership() {
        let mut wishlist = WishlistStore::new();
        assert!(!wishlist.is_in_wishlist(&ProductId::new("p7")));

        assert!(wishlist.add_item(mug()));
        assert!(wishlist.is_in_wishlist(&ProductId::new("p7")));
    }

    #[test]
    fn test_add_is_idempotent_and_does_not_update() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_item(mug());

        let mut repriced = mug();
        repriced.price = Price::new(dec!(1));
        assert!(!wishlist.add_item(repriced));

        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.items()[0].price.amount(), dec!(12.50));
    }

    #[test]
    fn test_remove() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_item(mug());

        assert!(wishlist.remove_item(&ProductId::new("p7")));
        assert!(!wishlist.remove_item(&ProductId::new("p7")));
        assert!(!wishlist.is_in_wishlist(&ProductId::new("p7")));
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = WishlistStore::new();
        assert!(wishlist.toggle(mug()));
        assert!(!wishlist.toggle(mug()));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_item(mug());
        wishlist.add_item(WishlistItem::new("p8", "Cap", "cap", Price::new(dec!(8))));

        wishlist.clear();
        assert!(wishlist.is_empty());
        assert!(!wishlist.is_in_wishlist(&ProductId::new("p7")));
        assert!(!wishlist.is_in_wishlist(&ProductId::new("p8")));
    }

    #[test]
    fn test_to_cart_item() {
        let line = mug().with_image("/img/mug.png").to_cart_item(2);
        assert_eq!(line.product_id.as_str(), "p7");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.image, "/img/mug.png");
        assert!(line.variant_id.is_none());
    }
}
