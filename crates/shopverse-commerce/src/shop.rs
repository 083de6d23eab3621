//! Shop session: the persisted cart and wishlist for one storage.

use crate::cart::CartStore;
use crate::wishlist::WishlistStore;
use crate::CommerceError;
use shopverse_storage::{Persisted, Storage};
use tracing::info;

/// Application state handed to the UI layer.
///
/// Created once per session with [`Shop::open`]. Mutations go through
/// [`Persisted::mutate`] on each store, which flushes after the change.
///
/// # Example
///
/// ```rust,ignore
/// let mut shop = Shop::open(FileStorage::open(".shopverse")?)?;
/// shop.cart.mutate(|cart| cart.add_item(item))?;
/// println!("Total: {}", shop.cart.state().total());
/// ```
#[derive(Debug)]
pub struct Shop<S> {
    /// Persisted cart.
    pub cart: Persisted<CartStore, S>,
    /// Persisted wishlist.
    pub wishlist: Persisted<WishlistStore, S>,
}

impl<S> Shop<S>
where
    S: Storage + Clone,
{
    /// Hydrate both stores from `storage`.
    pub fn open(storage: S) -> Result<Self, CommerceError> {
        let cart = Persisted::hydrate(storage.clone())?;
        let wishlist = Persisted::hydrate(storage)?;
        let shop = Self { cart, wishlist };
        info!(
            cart_lines = shop.cart.state().line_count(),
            wishlist_items = shop.wishlist.state().len(),
            "opened shop session"
        );
        Ok(shop)
    }

    /// Re-read both stores from storage.
    pub fn reload(&mut self) -> Result<(), CommerceError> {
        self.cart.reload()?;
        self.wishlist.reload()?;
        Ok(())
    }
}
