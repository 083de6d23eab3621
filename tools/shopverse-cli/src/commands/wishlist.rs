//! Wishlist commands.

use anyhow::{Context as _, Result};
use serde_json::json;
use shopverse_commerce::wishlist::{WishlistItem, WishlistStore};
use shopverse_commerce::ProductId;

use super::{confirm, slugify, ProductArgs, WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(WishlistCommand::List) {
        WishlistCommand::Add(product) => add(product, ctx),
        WishlistCommand::Remove { product_id } => remove(product_id.into(), ctx),
        WishlistCommand::Toggle(product) => toggle(product, ctx),
        WishlistCommand::Check { product_id } => check(product_id.into(), ctx),
        WishlistCommand::Move {
            product_id,
            quantity,
        } => move_to_cart(product_id.into(), quantity, ctx),
        WishlistCommand::List => list(ctx),
        WishlistCommand::Clear { yes } => clear(yes, ctx),
    }
}

fn to_item(product: ProductArgs) -> WishlistItem {
    let slug = product.slug.unwrap_or_else(|| slugify(&product.name));
    WishlistItem::new(product.product_id, product.name, slug, product.price).with_image(product.image)
}

fn add(product: ProductArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let item = to_item(product);
    let name = item.name.clone();

    let added = shop.wishlist.mutate(|wishlist| wishlist.add_item(item))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "added": added }));
    } else if added {
        ctx.output.success(&format!("Saved {} to wishlist", name));
    } else {
        ctx.output.info(&format!("{} is already in your wishlist", name));
    }
    Ok(())
}

fn remove(product_id: ProductId, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let removed = shop
        .wishlist
        .mutate(|wishlist| wishlist.remove_item(&product_id))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "removed": removed }));
    } else if removed {
        ctx.output.success(&format!("Removed {} from wishlist", product_id));
    } else {
        ctx.output.info(&format!("{} is not in your wishlist", product_id));
    }
    Ok(())
}

fn toggle(product: ProductArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let item = to_item(product);
    let name = item.name.clone();

    let saved = shop.wishlist.mutate(|wishlist| wishlist.toggle(item))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "inWishlist": saved }));
    } else if saved {
        ctx.output.success(&format!("Saved {} to wishlist", name));
    } else {
        ctx.output.success(&format!("Removed {} from wishlist", name));
    }
    Ok(())
}

fn check(product_id: ProductId, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let saved = shop.wishlist.state().is_in_wishlist(&product_id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "productId": product_id, "inWishlist": saved }));
    } else if saved {
        ctx.output.info(&format!("{} is in your wishlist", product_id));
    } else {
        ctx.output.info(&format!("{} is not in your wishlist", product_id));
    }
    Ok(())
}

fn move_to_cart(product_id: ProductId, quantity: i64, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let item = shop
        .wishlist
        .state()
        .items()
        .iter()
        .find(|item| item.product_id == product_id)
        .cloned()
        .with_context(|| format!("{} is not in your wishlist", product_id))?;

    let line_id = shop
        .cart
        .mutate(|cart| cart.add_item(item.to_cart_item(quantity)))?;
    shop.wishlist
        .mutate(|wishlist| wishlist.remove_item(&product_id))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "line": shop.cart.state().get_item(&line_id) }));
    } else {
        ctx.output
            .success(&format!("Moved {} to cart", item.name));
    }
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let wishlist = shop.wishlist.state();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "items": wishlist.items() }));
        return Ok(());
    }

    ctx.output.header("Wishlist");
    if wishlist.is_empty() {
        ctx.output.info("Your wishlist is empty");
        return Ok(());
    }

    let widths = [16, 28, 10];
    ctx.output.table_row(&["PRODUCT ID", "NAME", "PRICE"], &widths);
    for item in wishlist.items() {
        ctx.output.table_row(
            &[
                item.product_id.as_str(),
                &item.name,
                &item.price.display(ctx.currency()),
            ],
            &widths,
        );
    }
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let count = shop.wishlist.state().len();
    if count == 0 {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "cleared": 0 }));
        } else {
            ctx.output.info("Wishlist is already empty");
        }
        return Ok(());
    }

    if !confirm(&format!("Remove all {} saved product(s)?", count), yes, ctx)? {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    shop.wishlist.mutate(WishlistStore::clear)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": count }));
    } else {
        ctx.output.success("Wishlist cleared");
    }
    Ok(())
}
