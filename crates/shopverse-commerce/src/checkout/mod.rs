//! Checkout module.
//!
//! Prices a cart against tax, shipping and coupon tables.

mod calculator;
mod coupon;
mod shipping;
mod summary;

pub use calculator::{CheckoutRates, DEFAULT_SHIPPING_METHOD};
pub use coupon::{default_coupons, Coupon, CouponValue};
pub use shipping::{default_shipping_methods, ShippingMethod};
pub use summary::{CheckoutSummary, LineSummary};
