//! Configuration management commands.

use std::collections::HashSet;
use std::fs;

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use shopverse_commerce::checkout::{CheckoutRates, CouponValue, DEFAULT_SHIPPING_METHOD};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config: &CliConfig = &ctx.config;
    let currency = config.display.currency;

    ctx.output.info("[storage]");
    ctx.output.kv("data_dir", &config.storage.data_dir);
    ctx.output.kv("resolved", &ctx.data_dir().display().to_string());

    ctx.output.info("[display]");
    ctx.output.kv("currency", currency.code());

    ctx.output.info("[checkout]");
    ctx.output.kv("tax_rate", &config.checkout.tax_rate.to_string());

    ctx.output.info("Shipping methods:");
    for method in &config.checkout.shipping {
        let mut line = format!("{} - {} {}", method.id, method.name, method.price.display(currency));
        if let Some(threshold) = method.free_over {
            line.push_str(&format!(", free over {}", threshold.display(currency)));
        }
        if let Some(estimate) = method.delivery_estimate() {
            line.push_str(&format!(", {}", estimate));
        }
        ctx.output.list_item(&line);
    }

    ctx.output.info("Coupons:");
    for coupon in &config.checkout.coupons {
        ctx.output
            .list_item(&format!("{} - {}", coupon.code, coupon.description));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_rates(&ctx.config.checkout);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Check the checkout tables, returning `(errors, warnings)`.
fn check_rates(rates: &CheckoutRates) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if rates.tax_rate < Decimal::ZERO || rates.tax_rate >= Decimal::ONE {
        errors.push(format!(
            "checkout.tax_rate must be in [0, 1), got {}",
            rates.tax_rate
        ));
    }

    if rates.shipping.is_empty() {
        errors.push("checkout.shipping must list at least one method".to_string());
    }
    if rates.shipping_method(DEFAULT_SHIPPING_METHOD).is_none() {
        warnings.push(format!(
            "no '{}' shipping method; checkout needs --shipping",
            DEFAULT_SHIPPING_METHOD
        ));
    }

    let mut ids = HashSet::new();
    for (i, method) in rates.shipping.iter().enumerate() {
        if method.id.trim().is_empty() {
            errors.push(format!("checkout.shipping[{}].id is required", i));
        } else if !ids.insert(method.id.to_lowercase()) {
            errors.push(format!("duplicate shipping method '{}'", method.id));
        }
        if let (Some(min), Some(max)) = (method.min_delivery_days, method.max_delivery_days) {
            if min > max {
                warnings.push(format!(
                    "checkout.shipping[{}] delivery days {}-{} are reversed",
                    i, min, max
                ));
            }
        }
    }

    let mut codes = HashSet::new();
    for (i, coupon) in rates.coupons.iter().enumerate() {
        if coupon.code.trim().is_empty() {
            errors.push(format!("checkout.coupons[{}].code is required", i));
        } else if !codes.insert(coupon.code.to_uppercase()) {
            errors.push(format!("duplicate coupon code '{}'", coupon.code));
        }
        if let CouponValue::Percentage { percent } = coupon.discount {
            if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                errors.push(format!(
                    "coupon '{}' percent must be in (0, 100], got {}",
                    coupon.code, percent
                ));
            }
        }
    }

    (errors, warnings)
}
