//! Storefront configuration.
//!
//! Loaded from TOML, or JSON when the file ends in `.json`. Every field has a
//! default, so an empty file yields the stock storefront.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shelf_commerce::catalog::{Catalog, Product};
use shelf_commerce::CommerceError;
use thiserror::Error;

use crate::image::PlaceholderConfig;
use crate::notification::DEFAULT_DWELL;
use crate::viewport::DEFAULT_BREAKPOINT;

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Failed to parse TOML config")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("Failed to parse JSON config")]
    Json(#[from] serde_json::Error),

    /// The configured catalog is inconsistent.
    #[error("Invalid catalog")]
    Catalog(#[from] CommerceError),

    /// A value is out of range.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Page title and header brand.
    pub title: String,

    /// Viewport width (px) at which the desktop sidebar takes over.
    pub breakpoint_px: u32,

    /// How long a notification stays visible, in milliseconds.
    pub notification_dwell_ms: u64,

    /// Placeholder image service.
    pub placeholder: PlaceholderConfig,

    /// Catalog override. The built-in catalog is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            title: "Shelf Books".to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT,
            notification_dwell_ms: DEFAULT_DWELL.as_millis() as u64,
            placeholder: PlaceholderConfig::default(),
            products: None,
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check value ranges and the catalog override.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_px == 0 {
            return Err(ConfigError::Invalid("breakpoint_px must be positive".to_string()));
        }
        if self.notification_dwell_ms == 0 {
            return Err(ConfigError::Invalid(
                "notification_dwell_ms must be positive".to_string(),
            ));
        }
        self.catalog()?;
        Ok(())
    }

    /// Notification dwell time.
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.notification_dwell_ms)
    }

    /// The catalog: the configured products, or the built-in books.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.products {
            Some(products) => Ok(Catalog::new(products.clone())?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_commerce::{Money, ProductId};

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.dwell(), Duration::from_secs(3));
        assert_eq!(config.breakpoint_px, 1024);
        assert_eq!(config.catalog().unwrap().len(), 5);
    }

    #[test]
    fn test_toml_catalog_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
title = "Two Books"
breakpoint_px = 900
notification_dwell_ms = 1500

[placeholder]
background = "eeeeee"

[[products]]
id = 1
name = "Gita"
price = 14.99
image = "./assets/1.jpg"
description = "Classic"

[[products]]
id = 2
name = "Isopanisad"
price = 9.99
image = "./assets/2.jpg"
"#,
        )
        .unwrap();

        assert_eq!(config.title, "Two Books");
        assert_eq!(config.dwell(), Duration::from_millis(1500));
        assert_eq!(config.placeholder.background, "eeeeee");
        assert_eq!(config.placeholder.foreground, "333333");

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().price, Money::new(999));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_config() {
        let config =
            StorefrontConfig::from_json_str(r#"{"breakpoint_px": 768, "products": []}"#).unwrap();
        assert_eq!(config.breakpoint_px, 768);
        assert!(config.catalog().unwrap().is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let config = StorefrontConfig {
            breakpoint_px: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StorefrontConfig::from_toml_str(
            r#"
[[products]]
id = 1
name = "A"
price = 1.0
image = "a.jpg"

[[products]]
id = 1
name = "B"
price = 2.0
image = "b.jpg"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Catalog(CommerceError::DuplicateProduct(_)))
        ));
    }

    #[test]
    fn test_negative_price_fails_to_parse() {
        let result = StorefrontConfig::from_toml_str(
            r#"
[[products]]
id = 1
name = "A"
price = -1.0
image = "a.jpg"
"#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_errors_chain_their_source_once() {
        use std::error::Error as _;

        let err = StorefrontConfig::from_toml_str("title = ").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse TOML config");
        let source = err.source().unwrap().to_string();
        assert!(source.contains("line 1"));

        let err = StorefrontConfig::from_json_str("{").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse JSON config");
        assert!(err.source().is_some());

        let err = StorefrontConfig::load("/nonexistent/shelf.toml").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read config file /nonexistent/shelf.toml");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let result = StorefrontConfig::load("/nonexistent/shelf.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = StorefrontConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(StorefrontConfig::from_toml_str(&text).unwrap(), config);
    }
}
