//! Configuration management for Dayflow credentials
//!
//! Loads credential policy from an optional `config.toml` with
//! `DAYFLOW_` environment overrides. Every value has a default, so a
//! missing file yields the stock policy.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::identity::MAX_SERIAL;
use crate::password::MIN_PASSWORD_LENGTH;
use crate::utils::validation::PHONE_DIGITS;

/// Credential policy settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CredentialConfig {
    /// Default log filter when `RUST_LOG` is unset
    /// Environment: DAYFLOW_LOG_LEVEL
    pub log_level: String,

    /// Highest serial issued per company/initials/year scope
    /// Environment: DAYFLOW_MAX_SERIAL
    pub max_serial: u32,

    /// Minimum accepted password length, in characters
    pub min_password_length: usize,

    /// Exact digit count of a valid phone number
    pub phone_digits: usize,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_serial: MAX_SERIAL,
            min_password_length: MIN_PASSWORD_LENGTH,
            phone_digits: PHONE_DIGITS,
        }
    }
}

impl CredentialConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("DAYFLOW").try_parsing(true))
            .build()?;

        let config: CredentialConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_serial == 0 || self.max_serial > MAX_SERIAL {
            return Err(config::ConfigError::Message(format!(
                "max_serial must be between 1 and {MAX_SERIAL}"
            )));
        }

        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.phone_digits == 0 {
            return Err(config::ConfigError::Message(
                "phone_digits must be greater than 0".into(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "log_level cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
