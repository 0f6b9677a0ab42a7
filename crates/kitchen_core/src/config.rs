//! Core configuration and defaults.
//!
//! # Responsibility
//! - Hold draft defaults and derivation thresholds in one place.
//! - Parse optional JSON overrides supplied by the host application.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Unknown fields are rejected so typos do not silently fall back.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_CATEGORY: &str = "Other";
const DEFAULT_QUANTITY: u32 = 1;
const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;
const DEFAULT_EXPIRING_SOON_DAYS: i64 = 3;

/// Tunable defaults for the kitchen core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KitchenConfig {
    /// Category applied to inventory drafts without one.
    pub default_category: String,
    /// Quantity applied to inventory drafts without one.
    pub default_quantity: u32,
    /// Days after `added_date` used when a draft has no expiry date.
    pub default_shelf_life_days: u32,
    /// Upper bound (inclusive) of the "expiring soon" window, in days.
    pub expiring_soon_days: i64,
    /// Log level handed to `init_logging` by hosts that read it from here.
    pub log_level: String,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            default_quantity: DEFAULT_QUANTITY,
            default_shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            log_level: crate::logging::default_log_level().to_string(),
        }
    }
}

/// Configuration parse or consistency failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse kitchen config: {err}"),
            Self::Invalid(message) => write!(f, "invalid kitchen config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl KitchenConfig {
    /// Parses a JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - Returns `ConfigError::Invalid` when `validate` rejects the values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_category cannot be empty".to_string(),
            ));
        }
        if self.expiring_soon_days < 0 {
            return Err(ConfigError::Invalid(format!(
                "expiring_soon_days must be >= 0, got {}",
                self.expiring_soon_days
            )));
        }
        if let Err(err) = crate::logging::LogLevel::parse(&self.log_level) {
            return Err(ConfigError::Invalid(format!("log_level: {err}")));
        }
        Ok(())
    }
}
