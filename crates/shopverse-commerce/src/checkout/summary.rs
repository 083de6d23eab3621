//! Checkout summary types.

use crate::ids::LineItemId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Complete price breakdown for a checkout.
///
/// All amounts are rounded to the checkout currency, and
/// `total == subtotal - discount + shipping + tax` holds exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Per-line breakdown.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Cart total before discounts.
    pub subtotal: Price,
    /// Coupon code applied, as stored in the coupon table.
    pub coupon: Option<String>,
    /// Amount taken off by the coupon.
    pub discount: Price,
    /// Shipping method key.
    pub shipping_method: String,
    /// Delivery estimate for the shipping method.
    pub delivery_estimate: Option<String>,
    /// Shipping cost.
    pub shipping: Price,
    /// Tax on the discounted subtotal.
    pub tax: Price,
    /// Final total.
    pub total: Price,
}

impl CheckoutSummary {
    /// Check if a discount was applied.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Line item ID.
    pub line_item_id: LineItemId,
    /// Product name.
    pub name: String,
    /// Variant name.
    pub variant_name: Option<String>,
    /// Unit price.
    pub unit_price: Price,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub total: Price,
}
