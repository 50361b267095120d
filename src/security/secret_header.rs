//! Shared-secret header authorizer.
//!
//! # Responsibilities
//! - Find the secret header ignoring case
//! - Compare it with the configured secret
//! - Report whether the header was present independently of the match
//!
//! The simple response grants or denies the whole request. There is no
//! per-route scoping; use [`PolicyAuthorizer`](super::PolicyAuthorizer) for that.

use crate::config::AuthorizerConfig;
use crate::events::{AuthorizerContext, Headers, SimpleAuthorizerRequest, SimpleAuthorizerResponse};

/// Outcome of a secret comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretDecision {
    pub matched: bool,
    pub has_header: bool,
}

impl From<SecretDecision> for AuthorizerContext {
    fn from(decision: SecretDecision) -> Self {
        AuthorizerContext {
            matched: decision.matched,
            has_header: decision.has_header,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecretHeaderAuthorizer {
    header_name: String,
    expected_secret: Option<String>,
}

impl SecretHeaderAuthorizer {
    /// An unset or empty `expected_secret` denies every request.
    pub fn new(header_name: impl Into<String>, expected_secret: Option<String>) -> Self {
        Self {
            header_name: header_name.into(),
            expected_secret: expected_secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn from_config(config: &AuthorizerConfig) -> Self {
        Self::new(config.header_name.clone(), config.expected_secret.clone())
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn has_secret(&self) -> bool {
        self.expected_secret.is_some()
    }

    pub fn evaluate(&self, headers: &Headers) -> SecretDecision {
        let presented = headers.get_ignore_case(&self.header_name);
        let matched = match (presented, self.expected_secret.as_deref()) {
            (Some(value), Some(expected)) => value == expected,
            _ => false,
        };

        tracing::debug!(
            header = %self.header_name,
            matched,
            has_header = presented.is_some(),
            "Secret header evaluated"
        );

        SecretDecision {
            matched,
            has_header: presented.is_some(),
        }
    }

    pub fn authorize(&self, request: &SimpleAuthorizerRequest) -> SimpleAuthorizerResponse {
        let decision = self.evaluate(&request.headers);
        SimpleAuthorizerResponse {
            is_authorized: decision.matched,
            context: decision.into(),
        }
    }
}
