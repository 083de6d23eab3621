//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and wishlist operations are total and never produce these; they come
/// from input parsing, checkout calculation and the persistence boundary.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Price text is not a non-negative decimal.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Checkout was requested for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Coupon code is not in the coupon table.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Shipping method is not in the shipping table.
    #[error("Unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// Persisting or loading store state failed.
    #[cfg(feature = "storage")]
    #[error("Storage error: {0}")]
    Storage(#[from] shopverse_storage::StorageError),
}
