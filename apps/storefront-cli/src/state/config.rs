//! # Configuration State
//!
//! Store settings, catalog location and bank transfer details.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lowest ──────────────────────────────────────────────────► highest     │
//! │                                                                         │
//! │  ConfigState::default()                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront.toml  (or the file given with --config)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  STOREFRONT_* environment variables                                     │
//! │    STOREFRONT_STORE_NAME="Corner Shop"                                  │
//! │    STOREFRONT_BANK__ACCOUNT_NUMBER=9876543210   (nested: double _)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  --catalog-url / --catalog-file / --timeout-secs flags                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use storefront_catalog::DEFAULT_CATALOG_URL;
use storefront_core::Money;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STOREFRONT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (banner and receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Product list endpoint
    pub catalog_url: String,

    /// Read the product list from this file instead of `catalog_url`
    pub catalog_file: Option<PathBuf>,

    /// Catalog request timeout
    pub request_timeout_secs: u64,

    /// Shown when the customer pays by bank transfer
    pub bank: BankDetails,
}

/// Where a bank transfer should be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BankDetails {
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
}

impl Default for BankDetails {
    fn default() -> Self {
        BankDetails {
            bank_name: "ABC Bank".to_string(),
            account_number: "1234567890".to_string(),
            ifsc: "ABCD0123456".to_string(),
        }
    }
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Storefront"
    /// - Currency: $
    /// - Catalog: the public demo endpoint, 10s timeout
    /// - Bank: ABC Bank demo account
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            currency_symbol: "$".to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_file: None,
            request_timeout_secs: 10,
            bank: BankDetails::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the default file (if present) and the
    /// process environment.
    ///
    /// An explicit `path` must exist; the default `storefront.toml` is
    /// optional. Values are not checked here: flags still apply on top,
    /// so callers run [`validate`](Self::validate) once they are merged.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`load`](Self::load) with a caller-supplied environment
    /// source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: ConfigState = Config::builder()
            .add_source(file)
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Rejects settings the shell cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_file.is_none() && self.catalog_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog_url".to_string(),
                reason: "must not be empty without a catalog_file".to_string(),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Catalog request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_cli::state::ConfigState;
    /// use storefront_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = ConfigState::load_with_env(None, env(&[])).unwrap();

        assert_eq!(config, ConfigState::default());
        assert_eq!(config.bank.bank_name, "ABC Bank");
        assert_eq!(config.bank.account_number, "1234567890");
        assert_eq!(config.bank.ifsc, "ABCD0123456");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            store_name = "Corner Shop"
            currency_symbol = "€"
            catalog_file = "products.json"

            [bank]
            bank_name = "Example Bank"
            "#,
        );

        let config = ConfigState::load_with_env(Some(file.path()), env(&[])).unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.catalog_file, Some(PathBuf::from("products.json")));
        assert_eq!(config.bank.bank_name, "Example Bank");
        assert_eq!(config.bank.ifsc, "ABCD0123456");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file("store_name = \"From File\"\nrequest_timeout_secs = 3\n");

        let config = ConfigState::load_with_env(
            Some(file.path()),
            env(&[
                ("STOREFRONT_STORE_NAME", "From Env"),
                ("STOREFRONT_BANK__ACCOUNT_NUMBER", "9876543210"),
            ]),
        )
        .unwrap();

        assert_eq!(config.store_name, "From Env");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.bank.account_number, "9876543210");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let result = ConfigState::load_with_env(Some(Path::new("/nope/storefront.toml")), env(&[]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_zero_timeout_loads_but_fails_validation() {
        let file = toml_file("request_timeout_secs = 0\n");

        let config = ConfigState::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.request_timeout_secs, 0);

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "request_timeout_secs"
        ));
    }

    #[test]
    fn test_empty_url_without_file_fails_validation() {
        let config = ConfigState {
            catalog_url: "  ".to_string(),
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());

        let config = ConfigState {
            catalog_file: Some(PathBuf::from("products.json")),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
