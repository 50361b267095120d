//! Authorizer request and response envelopes.
//!
//! Two response forms exist:
//! - the simple form (`isAuthorized` + context), used by HTTP APIs with
//!   simple responses enabled; it grants or denies the whole request
//! - the policy form (principal + IAM policy document), used when access is
//!   scoped to a resource ARN

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{nullable, Headers};

/// IAM policy language version understood by API Gateway.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The only action an API Gateway authorizer grants.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Payload format 2.0 request authorizer event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleAuthorizerRequest {
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub route_arn: Option<String>,
    pub route_key: Option<String>,
    pub raw_path: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub identity_source: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub headers: Headers,
    pub request_context: Option<Value>,
}

/// Diagnostic context returned with a simple response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerContext {
    /// Whether the header value matched the expected secret.
    pub matched: bool,
    /// Whether the header was present at all.
    pub has_header: bool,
}

/// Simple (boolean) authorizer response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAuthorizerResponse {
    pub is_authorized: bool,
    pub context: AuthorizerContext,
}

/// REST API authorizer event (TOKEN or REQUEST type).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyAuthorizerRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub method_arn: String,
    pub authorization_token: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub headers: Headers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEffect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: Vec<String>,
    pub effect: PolicyEffect,
    pub resource: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// A single-statement document granting or denying invoke on `resource`.
    pub fn invoke(effect: PolicyEffect, resource: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                action: vec![INVOKE_ACTION.to_string()],
                effect,
                resource: vec![resource.into()],
            }],
        }
    }
}

/// Policy-form authorizer response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_policy_response_wire_shape() {
        let response = PolicyAuthorizerResponse {
            principal_id: "user".into(),
            policy_document: PolicyDocument::invoke(PolicyEffect::Allow, "arn:aws:execute-api:x"),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": ["execute-api:Invoke"],
                        "Effect": "Allow",
                        "Resource": ["arn:aws:execute-api:x"]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_simple_response_wire_shape() {
        let response = SimpleAuthorizerResponse {
            is_authorized: false,
            context: AuthorizerContext {
                matched: false,
                has_header: true,
            },
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "isAuthorized": false, "context": { "matched": false, "hasHeader": true } })
        );
    }

    #[test]
    fn test_simple_request_from_gateway_event() {
        let event = json!({
            "version": "2.0",
            "type": "REQUEST",
            "routeArn": "arn:aws:execute-api:eu-west-1:123456789012:abc/prod/GET/chat",
            "identitySource": ["something"],
            "routeKey": "GET /chat",
            "rawPath": "/prod/chat",
            "headers": { "x-amz-secret": "something" },
            "requestContext": { "stage": "prod" }
        });

        let request: SimpleAuthorizerRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.route_key.as_deref(), Some("GET /chat"));
        assert_eq!(request.headers.get_ignore_case("X-Amz-Secret"), Some("something"));
    }

    #[test]
    fn test_token_request_without_headers() {
        let event = json!({
            "type": "TOKEN",
            "authorizationToken": "allow",
            "methodArn": "arn:aws:execute-api:eu-west-1:123456789012:abc/prod/GET/chat"
        });

        let request: PolicyAuthorizerRequest = serde_json::from_value(event).unwrap();
        assert!(request.headers.is_empty());
        assert_eq!(
            request.method_arn,
            "arn:aws:execute-api:eu-west-1:123456789012:abc/prod/GET/chat"
        );
    }
}
