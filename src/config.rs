//! Configuration management for the contact normalizer.
//!
//! This module handles loading and validating configuration from environment
//! variables. Command-line flags are applied on top by the binary.

use crate::error::{ConfigError, ConfigResult};
use crate::pipeline::OrderRule;
use std::env;

/// Configuration for a normalization run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rule deciding when name tokens are swapped (default: trailing-zip)
    pub order_rule: OrderRule,

    /// Write indented JSON (default: true)
    pub pretty_output: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

/// Values supplied on the command line. A set field replaces the matching
/// environment variable, which is then not read at all.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub order_rule: Option<OrderRule>,
    pub pretty_output: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `NORMALIZER_ORDER_RULE`: `trailing-zip` or `preserve` (default: trailing-zip)
    /// - `NORMALIZER_PRETTY_OUTPUT`: `true` or `false` (default: true)
    /// - `NORMALIZER_LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Load configuration from environment variables, letting `overrides`
    /// take precedence. An invalid variable is ignored when overridden.
    pub fn from_env_with(overrides: &ConfigOverrides) -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let order_rule = match overrides.order_rule {
            Some(rule) => rule,
            None => Self::parse_env_order_rule("NORMALIZER_ORDER_RULE", defaults.order_rule)?,
        };

        let pretty_output = match overrides.pretty_output {
            Some(pretty) => pretty,
            None => Self::parse_env_bool("NORMALIZER_PRETTY_OUTPUT", defaults.pretty_output)?,
        };

        let log_level = env::var("NORMALIZER_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            order_rule,
            pretty_output,
            log_level,
        })
    }

    /// Parse an environment variable as an order rule with a default value.
    fn parse_env_order_rule(var_name: &str, default: OrderRule) -> ConfigResult<OrderRule> {
        match env::var(var_name) {
            Ok(val) => val.parse::<OrderRule>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            order_rule: OrderRule::TrailingZip,
            pretty_output: true,
            log_level: "warn".to_string(),
        }
    }
}
