//! Configuration management for the contact manager front end.
//!
//! This module handles loading and validating configuration from environment
//! variables. The registry itself never reads the environment; the binary
//! loads a [`Config`] and passes the relevant values in.

use crate::domain::ValidationPolicy;
use crate::error::{ConfigError, ConfigResult};
use crate::fixtures::DEFAULT_DELIMITER;
use std::env;

/// Configuration for the contact manager front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Validation policy for new contacts (default: presence only)
    pub validation_policy: ValidationPolicy,

    /// Column delimiter for fixture input (default: ',')
    pub delimiter: char,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_VALIDATION_POLICY`: `presence` or `reject-blank` (default: `presence`)
    /// - `CONTACTS_DELIMITER`: single column delimiter character (default: `,`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let validation_policy = match env::var("CONTACTS_VALIDATION_POLICY") {
            Ok(val) => val
                .parse::<ValidationPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACTS_VALIDATION_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => ValidationPolicy::default(),
        };

        let delimiter = Self::parse_env_char("CONTACTS_DELIMITER", DEFAULT_DELIMITER)?;

        // Quotes and line breaks are part of the record syntax
        if delimiter == '\'' || delimiter == '\n' || delimiter == '\r' {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DELIMITER".to_string(),
                reason: format!("{:?} cannot be used as a delimiter", delimiter),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            validation_policy,
            delimiter,
            log_level,
        })
    }

    /// Parse an environment variable as a single character with a default value.
    ///
    /// The value `\t` is accepted as an escaped tab.
    fn parse_env_char(var_name: &str, default: char) -> ConfigResult<char> {
        let val = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => return Ok(default),
        };

        if val == "\\t" {
            return Ok('\t');
        }

        let mut chars = val.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a single character, got: {:?}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            validation_policy: ValidationPolicy::default(),
            delimiter: DEFAULT_DELIMITER,
            log_level: "warn".to_string(),
        }
    }
}
