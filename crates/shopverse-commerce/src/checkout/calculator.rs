//! Checkout calculation over the cart.

use crate::cart::CartStore;
use crate::checkout::{
    default_coupons, default_shipping_methods, CheckoutSummary, Coupon, LineSummary,
    ShippingMethod,
};
use crate::money::{Currency, Price};
use crate::CommerceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shipping method used when none is requested.
pub const DEFAULT_SHIPPING_METHOD: &str = "standard";

/// Tax, shipping and coupon tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRates {
    /// Tax rate applied to the discounted subtotal (0.08 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Available shipping methods.
    #[serde(default = "default_shipping_methods")]
    pub shipping: Vec<ShippingMethod>,
    /// Accepted coupons.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<Coupon>,
}

fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

impl Default for CheckoutRates {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            shipping: default_shipping_methods(),
            coupons: default_coupons(),
        }
    }
}

impl CheckoutRates {
    /// Look up a shipping method by key.
    pub fn shipping_method(&self, id: &str) -> Option<&ShippingMethod> {
        self.shipping.iter().find(|m| m.id.eq_ignore_ascii_case(id.trim()))
    }

    /// Look up a coupon by code.
    pub fn coupon(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.matches(code))
    }

    /// Price the cart.
    ///
    /// `shipping_method` defaults to [`DEFAULT_SHIPPING_METHOD`]. A blank
    /// coupon code counts as no coupon.
    pub fn calculate(
        &self,
        cart: &CartStore,
        shipping_method: Option<&str>,
        coupon_code: Option<&str>,
        currency: Currency,
    ) -> Result<CheckoutSummary, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let method_id = shipping_method.unwrap_or(DEFAULT_SHIPPING_METHOD);
        let method = self
            .shipping_method(method_id)
            .ok_or_else(|| CommerceError::UnknownShippingMethod(method_id.to_string()))?;

        let coupon = match coupon_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => Some(
                self.coupon(code)
                    .ok_or_else(|| CommerceError::InvalidCouponCode(code.to_string()))?,
            ),
            None => None,
        };

        let subtotal = cart.total().round_for(currency);
        let discount = coupon
            .map(|c| c.discount.discount_for(subtotal).round_for(currency))
            .unwrap_or(Price::ZERO);
        let discounted = subtotal - discount;

        let shipping = if coupon.is_some_and(|c| c.discount.waives_shipping()) {
            Price::ZERO
        } else {
            method.rate_for(discounted).round_for(currency)
        };

        let tax = discounted.scale(self.tax_rate).round_for(currency);
        let total = discounted + shipping + tax;

        let lines = cart
            .items()
            .iter()
            .map(|item| LineSummary {
                line_item_id: item.id.clone(),
                name: item.name.clone(),
                variant_name: item.variant_name.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        debug!(
            subtotal = %subtotal,
            discount = %discount,
            shipping = %shipping,
            tax = %tax,
            total = %total,
            "calculated checkout"
        );

        Ok(CheckoutSummary {
            lines,
            item_count: cart.item_count(),
            subtotal,
            coupon: coupon.map(|c| c.code.clone()),
            discount,
            shipping_method: method.id.clone(),
            delivery_estimate: method.delivery_estimate(),
            shipping,
            tax,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use rust_decimal_macros::dec;

    fn cart_worth(price: Decimal, quantity: i64) -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::new("p1", "Tee", "tee", Price::new(price), quantity));
        cart
    }

    #[test]
    fn test_empty_cart_rejected() {
        let rates = CheckoutRates::default();
        let result = rates.calculate(&CartStore::new(), None, None, Currency::USD);
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_free_standard_shipping_over_threshold() {
        let rates = CheckoutRates::default();
        let summary = rates
            .calculate(&cart_worth(dec!(10), 5), None, None, Currency::USD)
            .unwrap();

        assert_eq!(summary.subtotal.amount(), dec!(50));
        assert!(summary.has_free_shipping());
        assert_eq!(summary.tax.amount(), dec!(4.00));
        assert_eq!(summary.total.amount(), dec!(54.00));
        assert_eq!(summary.shipping_method, "standard");
    }

    #[test]
    fn test_coupon_pushes_below_free_shipping() {
        let rates = CheckoutRates::default();
        let summary = rates
            .calculate(&cart_worth(dec!(10), 5), None, Some("save10"), Currency::USD)
            .unwrap();

        assert_eq!(summary.coupon.as_deref(), Some("SAVE10"));
        assert_eq!(summary.discount.amount(), dec!(5.00));
        assert_eq!(summary.shipping.amount(), dec!(5.99));
        assert_eq!(summary.tax.amount(), dec!(3.60));
        assert_eq!(summary.total.amount(), dec!(54.59));
    }

    #[test]
    fn test_free_shipping_coupon_on_express() {
        let rates = CheckoutRates::default();
        let summary = rates
            .calculate(&cart_worth(dec!(5), 2), Some("express"), Some("FREESHIP"), Currency::USD)
            .unwrap();

        assert!(summary.has_free_shipping());
        assert!(!summary.has_discount());
        assert_eq!(summary.total.amount(), dec!(10.80));
    }

    #[test]
    fn test_tax_midpoint_rounds_away_from_zero() {
        let rates = CheckoutRates {
            tax_rate: dec!(0.05),
            ..CheckoutRates::default()
        };
        // 0.05 * 0.10 = 0.005
        let summary = rates
            .calculate(&cart_worth(dec!(0.10), 1), Some("express"), None, Currency::USD)
            .unwrap();

        assert_eq!(summary.tax.amount(), dec!(0.01));
        assert_eq!(summary.total.amount(), dec!(15.10));
    }

    #[test]
    fn test_total_adds_up_after_rounding() {
        let rates = CheckoutRates::default();
        let summary = rates
            .calculate(&cart_worth(dec!(10.5625), 3), None, Some("SAVE10"), Currency::USD)
            .unwrap();

        assert_eq!(summary.subtotal.amount(), dec!(31.69));
        assert_eq!(
            summary.total,
            summary.subtotal - summary.discount + summary.shipping + summary.tax
        );
    }

    #[test]
    fn test_unknown_coupon_and_method() {
        let rates = CheckoutRates::default();
        let cart = cart_worth(dec!(10), 1);

        assert!(matches!(
            rates.calculate(&cart, None, Some("BOGUS"), Currency::USD),
            Err(CommerceError::InvalidCouponCode(code)) if code == "BOGUS"
        ));
        assert!(matches!(
            rates.calculate(&cart, Some("drone"), None, Currency::USD),
            Err(CommerceError::UnknownShippingMethod(_))
        ));
    }

    #[test]
    fn test_blank_coupon_ignored() {
        let rates = CheckoutRates::default();
        let summary = rates
            .calculate(&cart_worth(dec!(10), 1), None, Some("  "), Currency::USD)
            .unwrap();
        assert!(summary.coupon.is_none());
    }

    #[test]
    fn test_lines_mirror_cart() {
        let rates = CheckoutRates::default();
        let mut cart = cart_worth(dec!(10), 2);
        cart.add_item(
            CartItem::new("p2", "Hoodie", "hoodie", Price::new(dec!(30)), 1).with_variant("m", "Medium"),
        );

        let summary = rates.calculate(&cart, None, None, Currency::USD).unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.lines[1].variant_name.as_deref(), Some("Medium"));
        assert_eq!(summary.lines[0].total.amount(), dec!(20));
    }

    #[test]
    fn test_rates_deserialize_with_defaults() {
        let rates: CheckoutRates = serde_json::from_str(r#"{"tax_rate": "0.05"}"#).unwrap();
        assert_eq!(rates.tax_rate, dec!(0.05));
        assert!(rates.shipping_method("standard").is_some());
        assert!(rates.coupon("WELCOME20").is_some());
    }
}
