//! Cart commands.

use anyhow::{bail, Result};
use serde_json::json;
use shopverse_commerce::cart::{CartItem, CartStore};
use shopverse_commerce::{Currency, LineItemId};
use tracing::debug;

use super::{confirm, slugify, CartArgs, CartCommand, ProductArgs};
use crate::context::Context;
use crate::output::short_id;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::Add {
            product,
            quantity,
            variant,
            variant_name,
        } => add(product, quantity, variant, variant_name, ctx),
        CartCommand::Remove { id } => remove(&id, ctx),
        CartCommand::Update { id, quantity } => update(&id, quantity, ctx),
        CartCommand::Clear { yes } => clear(yes, ctx),
        CartCommand::List => list(ctx),
        CartCommand::Total => total(ctx),
    }
}

fn add(
    product: ProductArgs,
    quantity: i64,
    variant: Option<String>,
    variant_name: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let slug = product.slug.unwrap_or_else(|| slugify(&product.name));
    let mut item = CartItem::new(product.product_id, product.name, slug, product.price, quantity)
        .with_image(product.image);
    if let Some(variant) = variant {
        let name = variant_name.unwrap_or_else(|| variant.clone());
        item = item.with_variant(variant, name);
    }

    let id = shop.cart.mutate(|cart| cart.add_item(item))?;
    debug!(line = %id, "added to cart");

    let cart = shop.cart.state();
    let line = cart.get_item(&id);
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "line": line, "itemCount": cart.item_count() }));
        return Ok(());
    }

    if let Some(line) = line {
        ctx.output.success(&format!(
            "{} x{} in cart ({})",
            line.name,
            line.quantity,
            short_id(line.id.as_str())
        ));
    }
    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let Some(id) = resolve_line_id(shop.cart.state(), id)? else {
        return report_no_line(id, ctx);
    };

    let removed = shop.cart.mutate(|cart| cart.remove_item(&id))?;
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "removed": removed, "id": id }));
    } else {
        ctx.output.success(&format!("Removed line {}", short_id(id.as_str())));
    }
    Ok(())
}

fn update(id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let Some(id) = resolve_line_id(shop.cart.state(), id)? else {
        return report_no_line(id, ctx);
    };

    shop.cart.mutate(|cart| cart.update_quantity(&id, quantity))?;

    let line = shop.cart.state().get_item(&id);
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": id, "line": line }));
        return Ok(());
    }

    match line {
        Some(line) => ctx
            .output
            .success(&format!("{} quantity set to {}", line.name, line.quantity)),
        None => ctx
            .output
            .success(&format!("Removed line {}", short_id(id.as_str()))),
    }
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    if shop.cart.state().is_empty() {
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "cleared": 0 }));
        } else {
            ctx.output.info("Cart is already empty");
        }
        return Ok(());
    }

    let lines = shop.cart.state().line_count();
    if !confirm(&format!("Remove all {} cart line(s)?", lines), yes, ctx)? {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    shop.cart.mutate(CartStore::clear)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": lines }));
    } else {
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let cart = shop.cart.state();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.items(),
            "total": cart.total(),
            "itemCount": cart.item_count(),
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    print_lines(cart, ctx.currency(), ctx);
    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &cart.total().display(ctx.currency()));
    Ok(())
}

fn total(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let cart = shop.cart.state();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "total": cart.total(),
            "itemCount": cart.item_count(),
        }));
        return Ok(());
    }

    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &cart.total().display(ctx.currency()));
    Ok(())
}

fn print_lines(cart: &CartStore, currency: Currency, ctx: &Context) {
    let widths = [8, 28, 5, 10, 10];
    ctx.output
        .table_row(&["ID", "PRODUCT", "QTY", "PRICE", "TOTAL"], &widths);

    for line in cart.items() {
        let name = match line.variant_name {
            Some(ref variant) => format!("{} ({})", line.name, variant),
            None => line.name.clone(),
        };
        ctx.output.table_row(
            &[
                short_id(line.id.as_str()),
                &name,
                &line.quantity.to_string(),
                &line.price.display(currency),
                &line.line_total().display(currency),
            ],
            &widths,
        );
    }
}

/// Nothing in the cart matched; like the store, leave it unchanged.
fn report_no_line(input: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": input, "line": null }));
    } else {
        ctx.output.info(&format!("No cart line matches '{}'", input));
    }
    Ok(())
}

/// Resolve a line id typed by the user: an exact match first, then a unique
/// prefix. `None` when nothing matches.
fn resolve_line_id(cart: &CartStore, input: &str) -> Result<Option<LineItemId>> {
    if let Some(line) = cart.items().iter().find(|l| l.id.as_str() == input) {
        return Ok(Some(line.id.clone()));
    }

    let matches: Vec<&CartItem> = cart
        .items()
        .iter()
        .filter(|l| !input.is_empty() && l.id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [line] => Ok(Some(line.id.clone())),
        [] => Ok(None),
        _ => bail!(
            "'{}' matches {} cart lines; use more characters",
            input,
            matches.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopverse_commerce::Price;

    fn cart() -> CartStore {
        let mut cart = CartStore::new();
        for id in ["abc123", "abd456", "xyz"] {
            cart.add_item(
                CartItem::new(format!("p-{}", id), "Mug", "mug", Price::from_cents(500), 1)
                    .with_id(id),
            );
        }
        cart
    }

    #[test]
    fn test_resolve_exact_id() {
        let id = resolve_line_id(&cart(), "xyz").unwrap().unwrap();
        assert_eq!(id.as_str(), "xyz");
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let id = resolve_line_id(&cart(), "abc").unwrap().unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let err = resolve_line_id(&cart(), "ab").unwrap_err();
        assert!(err.to_string().contains("matches 2"));
    }

    #[test]
    fn test_resolve_unknown_is_not_an_error() {
        assert_eq!(resolve_line_id(&cart(), "nope").unwrap(), None);
        assert_eq!(resolve_line_id(&cart(), "").unwrap(), None);
    }
}
