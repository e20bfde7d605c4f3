//! # Configuration
//!
//! Layered settings for the rental server.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. An optional configuration file (TOML, YAML or JSON, by extension)
//! 3. `CAR_RENTAL__*` environment variables, with `__` between sections,
//!    e.g. `CAR_RENTAL__SERVER__PORT=8080`
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [store]
//! cars_file = "data/cars.json"
//!
//! [pricing]
//! locale = "pt-BR"
//! currency = "BRL"
//! tax_brackets = [
//!     { from = 18, to = 25, then = 1.1 },
//!     { from = 26, to = 30, then = 1.5 },
//!     { from = 31, to = 100, then = 1.3 },
//! ]
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use crate::domain::value_objects::{Currency, FormatConfig, Locale, TaxTable};
use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "CAR_RENTAL";

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Car store.
    pub store: StoreConfig,
    /// Pricing and receipt formatting.
    pub pricing: PricingConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Car store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the car records.
    pub cars_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cars_file: PathBuf::from("data/cars.json"),
        }
    }
}

/// Pricing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Receipt locale.
    pub locale: Locale,
    /// Currency of every amount.
    pub currency: Currency,
    /// Age brackets, validated on load.
    pub tax_brackets: TaxTable,
}

impl PricingConfig {
    /// Returns the receipt format.
    #[must_use]
    pub fn format(&self) -> FormatConfig {
        FormatConfig::new(self.locale, self.currency)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, `path` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if a
    /// value fails validation (for example overlapping tax brackets).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    /// Like [`load`](Self::load), reading overrides from `env` instead of
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_env(
        path: Option<&Path>,
        env: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(path, Some(env))
    }

    fn build(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TaxBracket;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = AppConfig::load_with_env(None, Map::new()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.store.cars_file, PathBuf::from("data/cars.json"));
        assert_eq!(config.pricing.tax_brackets, TaxTable::standard());
        assert_eq!(config.pricing.format(), FormatConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file(
            r#"
            [server]
            port = 8080

            [pricing]
            locale = "en-US"
            currency = "USD"
            tax_brackets = [
                { from = 21, to = 65, then = 1.2 },
                { from = 18, to = 20, then = 1.7 },
            ]
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), Map::new()).unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(
            config.pricing.format(),
            FormatConfig::new(Locale::EnUs, Currency::Usd)
        );
        assert_eq!(
            config.pricing.tax_brackets.brackets(),
            &[
                TaxBracket::new(18, 20, Decimal::new(17, 1)),
                TaxBracket::new(21, 65, Decimal::new(12, 1)),
            ]
        );
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[server]\nport = 8080\n");
        let env = Map::from([
            ("CAR_RENTAL__SERVER__PORT".to_string(), "9090".to_string()),
            (
                "CAR_RENTAL__STORE__CARS_FILE".to_string(),
                "/srv/cars.json".to_string(),
            ),
            ("CAR_RENTAL__LOGGING__JSON".to_string(), "true".to_string()),
        ]);

        let config = AppConfig::load_with_env(Some(file.path()), env).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.store.cars_file, PathBuf::from("/srv/cars.json"));
        assert!(config.logging.json);
    }

    #[test]
    fn overlapping_brackets_are_rejected() {
        let file = toml_file(
            r#"
            [pricing]
            tax_brackets = [
                { from = 18, to = 30, then = 1.1 },
                { from = 30, to = 40, then = 1.2 },
            ]
            "#,
        );

        let err = AppConfig::load_with_env(Some(file.path()), Map::new()).unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load_with_env(Some(&path), Map::new()).is_err());
    }
}
