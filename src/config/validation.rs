//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles parsing)
//! - Header names must be valid HTTP field names
//! - Probe path must be absolute, output key non-empty
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the config value

use http::HeaderName;
use thiserror::Error;

use crate::config::schema::{AuthorizerConfig, ProbeConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid header name")]
    InvalidHeaderName(String),

    #[error("principal id must not be empty")]
    EmptyPrincipal,

    #[error("request path '{0}' must start with '/'")]
    RelativePath(String),

    #[error("output key must not be empty")]
    EmptyOutputKey,
}

fn check_header_name(name: &str, errors: &mut Vec<ValidationError>) {
    if HeaderName::from_bytes(name.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeaderName(name.to_string()));
    }
}

pub fn validate_authorizer(config: &AuthorizerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_header_name(&config.header_name, &mut errors);
    if config.principal_id.trim().is_empty() {
        errors.push(ValidationError::EmptyPrincipal);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_probe(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_header_name(&config.secret_header, &mut errors);
    if !config.request_path.starts_with('/') {
        errors.push(ValidationError::RelativePath(config.request_path.clone()));
    }
    if config.output_key.is_empty() {
        errors.push(ValidationError::EmptyOutputKey);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_authorizer(&AuthorizerConfig::default()).is_ok());
        assert!(validate_probe(&ProbeConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ProbeConfig {
            output_key: String::new(),
            request_path: "chat".into(),
            secret_header: "x amz".into(),
            ..ProbeConfig::default()
        };

        let errors = validate_probe(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyOutputKey));
        assert!(errors.contains(&ValidationError::RelativePath("chat".into())));
    }

    #[test]
    fn test_mixed_case_header_name_is_valid() {
        let config = AuthorizerConfig {
            header_name: "X-Amz-Secret".into(),
            ..AuthorizerConfig::default()
        };
        assert!(validate_authorizer(&config).is_ok());
    }
}
