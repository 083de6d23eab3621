//! Storefront state for Shopverse.
//!
//! - **Cart**: line items merged by product and variant, with derived totals
//! - **Wishlist**: saved products, deduplicated by product
//! - **Checkout**: tax, shipping and coupon calculation over the cart
//! - **Support**: keyword-table support bot
//!
//! With the `storage` feature (on by default) both stores persist through
//! `shopverse-storage`, and [`Shop`] bundles them into one session object.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopverse_commerce::prelude::*;
//! use shopverse_storage::FileStorage;
//!
//! let mut shop = Shop::open(FileStorage::open(".shopverse")?)?;
//!
//! // Add an item, then flush
//! let price: Price = "12.50".parse()?;
//! shop.cart.mutate(|cart| cart.add_item(CartItem::new("p1", "Rust Mug", "rust-mug", price, 2)))?;
//!
//! // Calculate totals
//! let summary = CheckoutRates::default().calculate(shop.cart.state(), None, None, Currency::USD)?;
//! println!("Total: {}", summary.total.display(Currency::USD));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod support;
pub mod wishlist;

#[cfg(feature = "storage")]
mod shop;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Price};
#[cfg(feature = "storage")]
pub use shop::Shop;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Price};

    // Stores
    pub use crate::cart::{CartItem, CartStore};
    pub use crate::wishlist::{WishlistItem, WishlistStore};

    // Checkout
    pub use crate::checkout::{
        CheckoutRates, CheckoutSummary, Coupon, CouponValue, LineSummary, ShippingMethod,
    };

    // Support
    pub use crate::support::{SupportBot, SupportRule};

    #[cfg(feature = "storage")]
    pub use crate::Shop;
}
