//! IAM policy authorizer.
//!
//! [`PolicyAuthorizer::Permissive`] allows every request and performs no
//! access control. Deployments that need enforcement must select the
//! [`PolicyAuthorizer::SecretHeader`] variant.

use crate::config::{AuthorizerConfig, PolicyMode};
use crate::events::{PolicyAuthorizerRequest, PolicyAuthorizerResponse, PolicyDocument, PolicyEffect};
use crate::security::SecretHeaderAuthorizer;

#[derive(Debug, Clone)]
pub enum PolicyAuthorizer {
    /// Always allows invoke on the requested method ARN.
    Permissive { principal_id: String },
    /// Allows only when the request carries the shared secret header.
    SecretHeader {
        principal_id: String,
        secret: SecretHeaderAuthorizer,
    },
}

impl PolicyAuthorizer {
    pub fn permissive(principal_id: impl Into<String>) -> Self {
        PolicyAuthorizer::Permissive {
            principal_id: principal_id.into(),
        }
    }

    pub fn from_config(config: &AuthorizerConfig) -> Self {
        match config.policy_mode {
            PolicyMode::Permissive => Self::permissive(config.principal_id.clone()),
            PolicyMode::SecretHeader => PolicyAuthorizer::SecretHeader {
                principal_id: config.principal_id.clone(),
                secret: SecretHeaderAuthorizer::from_config(config),
            },
        }
    }

    pub fn mode(&self) -> PolicyMode {
        match self {
            PolicyAuthorizer::Permissive { .. } => PolicyMode::Permissive,
            PolicyAuthorizer::SecretHeader { .. } => PolicyMode::SecretHeader,
        }
    }

    pub fn is_permissive(&self) -> bool {
        matches!(self, PolicyAuthorizer::Permissive { .. })
    }

    fn principal_id(&self) -> &str {
        match self {
            PolicyAuthorizer::Permissive { principal_id }
            | PolicyAuthorizer::SecretHeader { principal_id, .. } => principal_id,
        }
    }

    pub fn authorize(&self, request: &PolicyAuthorizerRequest) -> PolicyAuthorizerResponse {
        let effect = match self {
            PolicyAuthorizer::Permissive { .. } => PolicyEffect::Allow,
            PolicyAuthorizer::SecretHeader { secret, .. } => {
                if secret.evaluate(&request.headers).matched {
                    PolicyEffect::Allow
                } else {
                    PolicyEffect::Deny
                }
            }
        };

        tracing::debug!(
            mode = %self.mode(),
            effect = ?effect,
            resource = %request.method_arn,
            "Policy issued"
        );

        PolicyAuthorizerResponse {
            principal_id: self.principal_id().to_string(),
            policy_document: PolicyDocument::invoke(effect, request.method_arn.clone()),
        }
    }
}
