//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod support;
pub mod wishlist;

use clap::{Args, Subcommand};
use shopverse_commerce::Price;

/// Product fields shared by cart and wishlist adds.
#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product ID.
    pub product_id: String,

    /// Product name.
    #[arg(short, long)]
    pub name: String,

    /// Unit price (e.g. 19.99).
    #[arg(short, long)]
    pub price: Price,

    /// Routing slug (default: derived from the name).
    #[arg(long)]
    pub slug: Option<String>,

    /// Image reference.
    #[arg(long, default_value = "")]
    pub image: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart.
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Quantity to add.
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,

        /// Variant ID.
        #[arg(long)]
        variant: Option<String>,

        /// Variant display name.
        #[arg(long, requires = "variant")]
        variant_name: Option<String>,
    },
    /// Remove a line from the cart.
    Remove {
        /// Line ID (or a unique prefix).
        id: String,
    },
    /// Set a line's quantity. Zero or less removes the line.
    Update {
        /// Line ID (or a unique prefix).
        id: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every line.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// List cart lines.
    List,
    /// Show the cart total and item count.
    Total,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Save a product.
    Add(ProductArgs),
    /// Remove a saved product.
    Remove {
        /// Product ID.
        product_id: String,
    },
    /// Save the product if absent, remove it if present.
    Toggle(ProductArgs),
    /// Check whether a product is saved.
    Check {
        /// Product ID.
        product_id: String,
    },
    /// Move a saved product into the cart.
    Move {
        /// Product ID.
        product_id: String,

        /// Quantity to add to the cart.
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,
    },
    /// List saved products.
    List,
    /// Remove every saved product.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Shipping method.
    #[arg(short, long)]
    pub shipping: Option<String>,

    /// Coupon code.
    #[arg(long)]
    pub coupon: Option<String>,
}

/// Arguments for the support command.
#[derive(Args)]
pub struct SupportArgs {
    /// Message for the support bot.
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Derive a routing slug from a product name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Ask before a destructive action unless skipped.
pub fn confirm(prompt: &str, skip: bool, ctx: &crate::context::Context) -> anyhow::Result<bool> {
    if skip || ctx.output.is_json() {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Rust Mug"), "rust-mug");
        assert_eq!(slugify("  T-Shirt (Large)!  "), "t-shirt-large");
        assert_eq!(slugify("Café Crème"), "café-crème");
        assert_eq!(slugify("!!!"), "");
    }
}
