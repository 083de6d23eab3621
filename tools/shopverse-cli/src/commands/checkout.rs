//! Checkout summary command.

use anyhow::{Context as _, Result};
use shopverse_commerce::checkout::CheckoutSummary;
use shopverse_commerce::Currency;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let currency = ctx.currency();

    let summary = ctx
        .config
        .checkout
        .calculate(
            shop.cart.state(),
            args.shipping.as_deref(),
            args.coupon.as_deref(),
            currency,
        )
        .context("Failed to calculate checkout")?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    print_summary(&summary, currency, ctx);
    Ok(())
}

fn print_summary(summary: &CheckoutSummary, currency: Currency, ctx: &Context) {
    ctx.output.header("Order Summary");

    let widths = [28, 5, 10];
    for line in &summary.lines {
        let name = match line.variant_name {
            Some(ref variant) => format!("{} ({})", line.name, variant),
            None => line.name.clone(),
        };
        ctx.output.table_row(
            &[
                &name,
                &format!("x{}", line.quantity),
                &line.total.display(currency),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &summary.subtotal.display(currency));
    if summary.has_discount() {
        let code = summary.coupon.as_deref().unwrap_or_default();
        ctx.output.kv(
            &format!("Discount ({})", code),
            &format!("-{}", summary.discount.display(currency)),
        );
    }

    let shipping = if summary.has_free_shipping() {
        "Free".to_string()
    } else {
        summary.shipping.display(currency)
    };
    match summary.delivery_estimate {
        Some(ref estimate) => ctx.output.kv(
            &format!("Shipping ({})", summary.shipping_method),
            &format!("{} ({})", shipping, estimate),
        ),
        None => ctx
            .output
            .kv(&format!("Shipping ({})", summary.shipping_method), &shipping),
    }

    ctx.output.kv("Tax", &summary.tax.display(currency));
    ctx.output.kv("Total", &summary.total.display(currency));
}
