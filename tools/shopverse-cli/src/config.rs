//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopverse_commerce::checkout::CheckoutRates;
use shopverse_commerce::Currency;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopverse.toml", ".shopverse.toml", "shopverse.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Local storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Tax, shipping and coupon tables.
    #[serde(default)]
    pub checkout: CheckoutRates,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted stores, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".shopverse".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used to format prices.
    #[serde(default)]
    pub currency: Currency,
}

/// Generate a default shopverse.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shopverse storefront configuration

[storage]
data_dir = ".shopverse"

[display]
currency = "USD"

[checkout]
tax_rate = "0.08"

[[checkout.shipping]]
id = "standard"
name = "Standard Shipping"
price = "5.99"
free_over = "50"
min_delivery_days = 5
max_delivery_days = 7

[[checkout.shipping]]
id = "express"
name = "Express Shipping"
price = "14.99"
min_delivery_days = 1
max_delivery_days = 2

[[checkout.coupons]]
code = "SAVE10"
description = "10% off your order"
discount = { type = "percentage", percent = "10" }

[[checkout.coupons]]
code = "WELCOME20"
description = "20% off your first order"
discount = { type = "percentage", percent = "20" }

[[checkout.coupons]]
code = "FREESHIP"
description = "Free shipping"
discount = { type = "free_shipping" }
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.data_dir, ".shopverse");
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.checkout, CheckoutRates::default());
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.checkout, CheckoutRates::default());
    }

    #[test]
    fn test_partial_checkout_section() {
        let config: CliConfig = toml::from_str(
            r#"
[display]
currency = "EUR"

[checkout]
tax_rate = "0.2"

[[checkout.coupons]]
code = "FIVER"
discount = { type = "fixed", amount = "5" }
"#,
        )
        .unwrap();

        assert_eq!(config.display.currency, Currency::EUR);
        assert_eq!(config.checkout.tax_rate, dec!(0.2));
        assert_eq!(config.checkout.coupons.len(), 1);
        assert!(config.checkout.coupon("fiver").is_some());
        assert!(config.checkout.shipping_method("express").is_some());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["shopverse.toml", "shopverse.json"] {
            let path = dir.path().join(name);
            let mut config = CliConfig::default();
            config.storage.data_dir = "state".to_string();
            config.save(&path).unwrap();

            let loaded = CliConfig::load(&path).unwrap();
            assert_eq!(loaded.storage.data_dir, "state");
            assert_eq!(loaded.checkout, config.checkout);
        }
    }
}
