//! Wishlist module.

mod item;
mod store;

pub use item::WishlistItem;
pub use store::WishlistStore;
