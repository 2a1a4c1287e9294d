//! # Configuration
//!
//! [`ShopConfig`] collects the settings the rest of the system used to take as
//! constructor arguments. It deserializes from TOML; every field has a default,
//! so an empty document is a valid configuration:
//!
//! ```toml
//! minimum_order_value = 15.0
//! desk_buffer = 64
//! estimated_time = "30 minutes"
//!
//! [deal_of_the_day]
//! item_id = 2
//! message = "Pizza is our Deal of the Day!"
//! ```
//!
//! The binary reads the file named by `BISTRO_CONFIG`, falling back to the
//! defaults when the variable is unset.

use bistro_ledger::deal::DealOfTheDay;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

pub const CONFIG_ENV_VAR: &str = "BISTRO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Smallest order total the shop accepts.
    pub minimum_order_value: Decimal,
    /// Capacity of the order desk's request channel.
    pub desk_buffer: usize,
    /// Pickup estimate returned with every accepted order.
    pub estimated_time: String,
    /// A malformed table is logged and ignored rather than failing the load.
    #[serde(deserialize_with = "lenient_deal")]
    pub deal_of_the_day: Option<DealOfTheDay>,
    /// Sent as `X-API-Key` by the API submitter.
    pub api_key: Option<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            minimum_order_value: Decimal::from(10),
            desk_buffer: 32,
            estimated_time: "25 minutes".to_string(),
            deal_of_the_day: Some(DealOfTheDay::default()),
            api_key: None,
        }
    }
}

fn lenient_deal<'de, D>(deserializer: D) -> Result<Option<DealOfTheDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    match value.try_into::<DealOfTheDay>() {
        Ok(deal) => Ok(Some(deal)),
        Err(e) => {
            error!(error = %e, "Ignoring unparsable deal of the day");
            Ok(None)
        }
    }
}

impl ShopConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads the file named by `BISTRO_CONFIG`, or returns the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.desk_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "desk_buffer",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.minimum_order_value < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "minimum_order_value",
                reason: format!("must not be negative, got {}", self.minimum_order_value),
            });
        }
        Ok(())
    }
}
