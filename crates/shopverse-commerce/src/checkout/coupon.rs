//! Coupon types.

use crate::money::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a coupon takes off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponValue {
    /// Percentage off the subtotal (0 - 100).
    Percentage { percent: Decimal },
    /// Fixed amount off the subtotal.
    Fixed { amount: Price },
    /// Shipping is waived.
    FreeShipping,
}

impl CouponValue {
    /// Calculate the discount for a given subtotal, unrounded.
    ///
    /// Never exceeds the subtotal.
    pub fn discount_for(&self, subtotal: Price) -> Price {
        let amount = match self {
            CouponValue::Percentage { percent } => subtotal.percentage(*percent),
            CouponValue::Fixed { amount } => *amount,
            CouponValue::FreeShipping => Price::ZERO,
        };
        amount.min(subtotal)
    }

    /// Whether the coupon waives shipping.
    pub fn waives_shipping(&self) -> bool {
        matches!(self, CouponValue::FreeShipping)
    }
}

/// A coupon definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Coupon code (e.g., "SAVE10"), matched case-insensitively.
    pub code: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Discount granted.
    pub discount: CouponValue,
}

impl Coupon {
    /// Create a percentage coupon.
    pub fn percentage(code: impl Into<String>, description: impl Into<String>, percent: Decimal) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            discount: CouponValue::Percentage { percent },
        }
    }

    /// Create a fixed amount coupon.
    pub fn fixed_amount(code: impl Into<String>, description: impl Into<String>, amount: Price) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            discount: CouponValue::Fixed { amount },
        }
    }

    /// Create a free shipping coupon.
    pub fn free_shipping(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            discount: CouponValue::FreeShipping,
        }
    }

    /// Whether `code` names this coupon.
    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

/// The built-in coupon table.
pub fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon::percentage("SAVE10", "10% off your order", Decimal::TEN),
        Coupon::percentage("WELCOME20", "20% off your first order", Decimal::from(20)),
        Coupon::free_shipping("FREESHIP", "Free shipping"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_coupon() {
        let coupon = Coupon::percentage("SAVE10", "10% off", dec!(10));
        let amount = coupon.discount.discount_for(Price::new(dec!(100)));
        assert_eq!(amount.amount(), dec!(10));
    }

    #[test]
    fn test_fixed_coupon_capped() {
        let coupon = Coupon::fixed_amount("SAVE100", "100 off", Price::new(dec!(100)));
        let amount = coupon.discount.discount_for(Price::new(dec!(50)));
        assert_eq!(amount.amount(), dec!(50));
    }

    #[test]
    fn test_free_shipping_coupon() {
        let coupon = Coupon::free_shipping("FREESHIP", "Free shipping");
        assert!(coupon.discount.waives_shipping());
        assert!(coupon.discount.discount_for(Price::new(dec!(20))).is_zero());
    }

    #[test]
    fn test_code_match_is_case_insensitive() {
        let coupon = Coupon::percentage("SAVE10", "", dec!(10));
        assert!(coupon.matches("save10"));
        assert!(coupon.matches(" SAVE10 "));
        assert!(!coupon.matches("SAVE20"));
    }

    #[test]
    fn test_coupon_deserializes_tagged_discount() {
        let coupon: Coupon = serde_json::from_str(
            r#"{"code": "HALF", "discount": {"type": "percentage", "percent": 50}}"#,
        )
        .unwrap();
        assert_eq!(coupon.discount, CouponValue::Percentage { percent: dec!(50) });
        assert!(coupon.description.is_empty());
    }
}
