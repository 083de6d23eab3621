//! Shopping cart module.
//!
//! Contains the cart line item type and the cart store.

mod item;
mod store;

pub use item::CartItem;
pub use store::CartStore;
