//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, CurrencyCode, EUR, MoneyError, PLN, USD};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency used when none is given explicitly.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Currencies known to the application.
    #[serde(default = "default_currencies")]
    pub currencies: Vec<CurrencyConfig>,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A single currency entry in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code.
    pub code: String,
    /// Numeral base of the minor unit.
    #[serde(default = "default_base")]
    pub base: u32,
    /// Number of minor-unit digits.
    #[serde(default = "default_exponent")]
    pub exponent: u32,
}

impl CurrencyConfig {
    /// Validates this entry into a currency descriptor.
    pub fn to_currency(&self) -> Result<Currency, MoneyError> {
        let code: CurrencyCode = self.code.parse()?;
        Currency::new(code, self.base, self.exponent)
    }
}

impl From<Currency> for CurrencyConfig {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency.code().to_string(),
            base: currency.base(),
            exponent: currency.exponent(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_currency() -> String {
    "PLN".to_string()
}

fn default_currencies() -> Vec<CurrencyConfig> {
    [PLN, USD, EUR].into_iter().map(CurrencyConfig::from).collect()
}

fn default_base() -> u32 {
    10
}

fn default_exponent() -> u32 {
    2
}

fn default_log_filter() -> String {
    "skarbonka=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SKARBONKA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        temp_env::with_vars_unset(
            [
                "SKARBONKA__DEFAULT_CURRENCY",
                "SKARBONKA__LOGGING__FILTER",
                "RUN_MODE",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.default_currency, "PLN");
                assert_eq!(config.currencies.len(), 3);
                assert_eq!(config.logging.filter, "skarbonka=info");
                assert!(!config.logging.json);
            },
        );
    }

    #[test]
    fn test_load_env_override() {
        temp_env::with_vars(
            [
                ("SKARBONKA__DEFAULT_CURRENCY", Some("USD")),
                ("SKARBONKA__LOGGING__FILTER", Some("skarbonka=debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.default_currency, "USD");
                assert_eq!(config.logging.filter, "skarbonka=debug");
            },
        );
    }

    #[test]
    fn test_currency_config_to_currency() {
        let entry = CurrencyConfig {
            code: "chf".to_string(),
            base: 10,
            exponent: 2,
        };
        let currency = entry.to_currency().unwrap();
        assert_eq!(currency.code().as_str(), "CHF");
        assert_eq!(currency.factor(), 100);
    }

    #[test]
    fn test_currency_config_rejects_zero_base() {
        let entry = CurrencyConfig {
            code: "XXX".to_string(),
            base: 0,
            exponent: 2,
        };
        assert!(matches!(
            entry.to_currency(),
            Err(MoneyError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_currencies_round_trip() {
        let currencies: Vec<Currency> = default_currencies()
            .iter()
            .map(|c| c.to_currency().unwrap())
            .collect();
        assert_eq!(currencies, vec![PLN, USD, EUR]);
    }
}
