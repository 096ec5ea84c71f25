//! Process configuration read from environment variables
//!
//! Read once at startup:
//!   FUNCTIONS_WORKER_RUNTIME - runtime name shown in the API documentation title
//!   JUROS_VALIDACAO          - `enabled` (default) or `disabled`

use std::env;
use thiserror::Error;

use crate::calculation::ValidationMode;

pub const WORKER_RUNTIME_VAR: &str = "FUNCTIONS_WORKER_RUNTIME";
pub const VALIDATION_VAR: &str = "JUROS_VALIDACAO";

/// Runtime name used when `FUNCTIONS_WORKER_RUNTIME` is unset
pub const DEFAULT_WORKER_RUNTIME: &str = "rust";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected enabled or disabled")]
    InvalidValidationMode { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub worker_runtime: String,
    pub validation: ValidationMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_runtime: DEFAULT_WORKER_RUNTIME.to_string(),
            validation: ValidationMode::Enforced,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test maps)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let worker_runtime = lookup(WORKER_RUNTIME_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORKER_RUNTIME.to_string());

        let validation = match lookup(VALIDATION_VAR) {
            Some(value) => parse_validation_mode(&value)?,
            None => ValidationMode::Enforced,
        };

        Ok(Self {
            worker_runtime,
            validation,
        })
    }
}

fn parse_validation_mode(value: &str) -> Result<ValidationMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "enabled" | "on" | "true" | "1" => Ok(ValidationMode::Enforced),
        "disabled" | "off" | "false" | "0" => Ok(ValidationMode::Disabled),
        _ => Err(ConfigError::InvalidValidationMode {
            var: VALIDATION_VAR,
            value: value.to_string(),
        }),
    }
}
