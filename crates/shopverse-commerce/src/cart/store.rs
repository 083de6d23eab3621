//! Cart store: line items plus derived totals.

use crate::cart::CartItem;
use crate::ids::LineItemId;
use crate::money::Price;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The shopping cart.
///
/// Holds at most one line per `(product_id, variant_id)` pair, in insertion
/// order. Operations never fail; quantities and prices are trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the cart.
    ///
    /// If a line already holds the same product and variant, its quantity is
    /// increased by `item.quantity` and the rest of `item` is ignored.
    /// Otherwise `item` is appended as a new line. Returns the id of the line
    /// that holds the item.
    pub fn add_item(&mut self, item: CartItem) -> LineItemId {
        if let Some(existing) = self.items.iter_mut().find(|i| i.same_purchase(&item)) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(line = %existing.id, quantity = existing.quantity, "merged cart line");
            return existing.id.clone();
        }

        let id = item.id.clone();
        debug!(line = %id, product = %item.product_id, "added cart line");
        self.items.push(item);
        id
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(line = %id, "removed cart line");
        }
        removed
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// was changed or removed.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                debug!(line = %id, quantity, "updated cart line quantity");
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
    }

    /// Sum of `price * quantity` over all lines, unrounded.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get_item(&self, id: &LineItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

#[cfg(feature = "storage")]
impl shopverse_storage::Persist for CartStore {
    const STORAGE_KEY: &'static str = "shopverse-cart";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tee(quantity: i64) -> CartItem {
        CartItem::new("p1", "Tee", "tee", Price::new(dec!(10)), quantity)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = CartStore::new();
        let first = cart.add_item(tee(2));
        let second = cart.add_item(tee(3));

        assert_eq!(first, second);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total().amount(), dec!(50));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_merge_keeps_existing_line_fields() {
        let mut cart = CartStore::new();
        cart.add_item(tee(1));
        let mut repriced = tee(1);
        repriced.price = Price::new(dec!(99));
        repriced.name = "Renamed".to_string();
        cart.add_item(repriced);

        let line = &cart.items()[0];
        assert_eq!(line.price.amount(), dec!(10));
        assert_eq!(line.name, "Tee");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_variants_are_separate_lines() {
        let mut cart = CartStore::new();
        cart.add_item(tee(1).with_variant("s", "Small"));
        cart.add_item(tee(1).with_variant("l", "Large"));
        cart.add_item(tee(1));

        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::new();
        let id = cart.add_item(tee(1));

        assert!(cart.update_quantity(&id, 7));
        let line = cart.get_item(&id).unwrap();
        assert_eq!(line.quantity, 7);
        assert_eq!(line.price.amount(), dec!(10));
        assert_eq!(line.name, "Tee");
        assert_eq!(line.slug, "tee");
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        for quantity in [0, -1] {
            let mut cart = CartStore::new();
            let id = cart.add_item(tee(4));
            assert!(cart.update_quantity(&id, quantity));
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(tee(1));
        assert!(!cart.update_quantity(&LineItemId::new("missing"), 3));
        assert!(!cart.update_quantity(&LineItemId::new("missing"), 0));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        let id = cart.add_item(tee(1));
        cart.add_item(CartItem::new("p2", "Cap", "cap", Price::new(dec!(5)), 1));

        assert!(cart.remove_item(&id));
        assert!(!cart.remove_item(&id));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].product_id.as_str(), "p2");
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::new("p1", "Tee", "tee", Price::new(dec!(19.99)), 2));
        cart.add_item(CartItem::new("p2", "Cap", "cap", Price::new(dec!(5.25)), 3));

        assert_eq!(cart.total().amount(), dec!(55.73));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_item(tee(2));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartStore::new();
        for (i, product) in ["c", "a", "b"].iter().enumerate() {
            cart.add_item(CartItem::new(*product, "x", "x", Price::ZERO, i as i64 + 1));
        }
        let order: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
