//! # Client configuration — `shop.toml`
//!
//! Defines the TOML configuration bundled with the storefront UI. It tells the
//! client where the backend lives and how the deposit wizard behaves.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [shop]
//! name = "ShopTFT"
//!
//! [deposit]
//! min_amount = 10000
//! default_amount = 10000
//! quick_amounts = [50000, 100000, 200000, 500000]
//! transfer_note = "Nap Tien ShopTFT"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ShopConfig`] | Top-level config with TOML parsing and the `SHOP_API_URL` override. |
//! | [`ApiConfig`] | Backend base address. |
//! | [`ShopSection`] | Display name of the shop. |
//! | [`DepositConfig`] | Minimum, default and quick-pick amounts plus the bank transfer note. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `shop.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub shop: ShopSection,
    #[serde(default)]
    pub deposit: DepositConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopSection {
    #[serde(default = "default_shop_name")]
    pub name: String,
}

fn default_shop_name() -> String {
    "ShopTFT".to_string()
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

/// Deposit wizard settings. Amounts are in VND.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepositConfig {
    #[serde(default = "default_min_amount")]
    pub min_amount: i64,
    #[serde(default = "default_min_amount")]
    pub default_amount: i64,
    #[serde(default = "default_quick_amounts")]
    pub quick_amounts: Vec<i64>,
    /// Reference the customer must put in the bank transfer.
    #[serde(default = "default_transfer_note")]
    pub transfer_note: String,
}

fn default_min_amount() -> i64 {
    10_000
}

fn default_quick_amounts() -> Vec<i64> {
    vec![50_000, 100_000, 200_000, 500_000]
}

fn default_transfer_note() -> String {
    "Nap Tien ShopTFT".to_string()
}

impl Default for DepositConfig {
    fn default() -> Self {
        Self {
            min_amount: default_min_amount(),
            default_amount: default_min_amount(),
            quick_amounts: default_quick_amounts(),
            transfer_note: default_transfer_note(),
        }
    }
}

impl ShopConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "shop.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `source`, falling back to defaults on invalid TOML, then apply
    /// the build-time `SHOP_API_URL` override if one was set.
    pub fn load(source: &str) -> Self {
        let config = Self::from_toml(source).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}, using defaults", Self::filename(), e);
            Self::default()
        });
        config.with_api_override(option_env!("SHOP_API_URL"))
    }

    /// Replace the backend address when `url` is a non-empty string.
    pub fn with_api_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ShopConfig::from_toml("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.deposit.min_amount, 10_000);
        assert_eq!(config.deposit.quick_amounts.len(), 4);
    }

    #[test]
    fn test_partial_config() {
        let config = ShopConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.shop.example"

            [deposit]
            min_amount = 20000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.shop.example");
        assert_eq!(config.deposit.min_amount, 20_000);
        assert_eq!(config.deposit.transfer_note, "Nap Tien ShopTFT");
        assert_eq!(config.shop.name, "ShopTFT");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = ShopConfig::from_toml("[api\nbase_url = 3");
        assert!(config.is_err());
        let loaded = ShopConfig::default().with_api_override(None);
        assert_eq!(loaded.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_api_override() {
        let config = ShopConfig::default().with_api_override(Some("  http://10.0.0.2:3000 "));
        assert_eq!(config.api.base_url, "http://10.0.0.2:3000");

        let config = ShopConfig::default().with_api_override(Some(""));
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ShopConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(ShopConfig::from_toml(&text).unwrap(), config);
    }
}
