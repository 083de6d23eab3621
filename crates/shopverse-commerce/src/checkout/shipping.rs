//! Shipping method types.

use crate::money::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Method key (e.g., "standard").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Shipping price.
    pub price: Price,
    /// Subtotal at or above which shipping is free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_over: Option<Price>,
    /// Minimum delivery days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_delivery_days: Option<u32>,
    /// Maximum delivery days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_delivery_days: Option<u32>,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            free_over: None,
            min_delivery_days: None,
            max_delivery_days: None,
        }
    }

    /// Make shipping free at or above `threshold`.
    pub fn free_over(mut self, threshold: Price) -> Self {
        self.free_over = Some(threshold);
        self
    }

    /// Set the delivery window.
    pub fn delivery_days(mut self, min: u32, max: u32) -> Self {
        self.min_delivery_days = Some(min);
        self.max_delivery_days = Some(max);
        self
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} days", min, max)),
            (Some(min), None) => Some(format!("{}+ days", min)),
            (None, Some(max)) => Some(format!("Up to {} days", max)),
            (None, None) => None,
        }
    }

    /// Shipping charged for an order with the given (discounted) subtotal.
    pub fn rate_for(&self, subtotal: Price) -> Price {
        match self.free_over {
            Some(threshold) if subtotal >= threshold => Price::ZERO,
            _ => self.price,
        }
    }
}

/// The built-in shipping table.
pub fn default_shipping_methods() -> Vec<ShippingMethod> {
    vec![
        ShippingMethod::new("standard", "Standard Shipping", Price::from_cents(599))
            .free_over(Price::new(Decimal::from(50)))
            .delivery_days(5, 7),
        ShippingMethod::new("express", "Express Shipping", Price::from_cents(1499))
            .delivery_days(1, 2),
    ]
}
