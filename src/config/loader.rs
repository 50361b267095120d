//! Configuration loading from the environment.
//!
//! Every loader takes a lookup function so tests never touch the real
//! process environment.

use thiserror::Error;

use crate::config::schema::{AuthorizerConfig, PolicyMode, ProbeConfig};
use crate::config::validation::{validate_authorizer, validate_probe, ValidationError};

pub const ENV_SECRET_VALUE: &str = "SECRET_VALUE";
pub const ENV_SECRET_HEADER_NAME: &str = "SECRET_HEADER_NAME";
pub const ENV_POLICY_MODE: &str = "POLICY_AUTHORIZER_MODE";
pub const ENV_PRINCIPAL_ID: &str = "POLICY_PRINCIPAL_ID";
pub const ENV_PROBE_SECRET: &str = "ADMIN_API_SECRET";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Build and validate the authorizer configuration.
///
/// Empty values are treated as unset.
pub fn load_authorizer_config<F>(lookup: F) -> Result<AuthorizerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut config = AuthorizerConfig::default();

    if let Some(name) = get(ENV_SECRET_HEADER_NAME) {
        config.header_name = name;
    }
    config.expected_secret = get(ENV_SECRET_VALUE);
    if let Some(principal) = get(ENV_PRINCIPAL_ID) {
        config.principal_id = principal;
    }
    if let Some(mode) = get(ENV_POLICY_MODE) {
        config.policy_mode = mode
            .parse::<PolicyMode>()
            .map_err(|reason| ConfigError::InvalidValue {
                key: ENV_POLICY_MODE,
                reason,
            })?;
    }

    validate_authorizer(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build and validate the probe configuration.
pub fn load_probe_config<F>(lookup: F) -> Result<ProbeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ProbeConfig::default();
    if let Some(secret) = lookup(ENV_PROBE_SECRET).filter(|v| !v.is_empty()) {
        config.secret_value = secret;
    }

    validate_probe(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
