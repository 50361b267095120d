//! Configuration schema definitions.
//!
//! The demo deployment hard-wires a secret, a sub-path and an output key.
//! They are carried here as defaults so handlers never embed literals.

use std::fmt;
use std::str::FromStr;

/// Header carrying the shared secret.
pub const DEFAULT_SECRET_HEADER: &str = "x-amz-secret";

/// Principal reported by the policy authorizer.
pub const DEFAULT_PRINCIPAL_ID: &str = "user";

/// Stack output holding the admin API base URL.
pub const DEFAULT_OUTPUT_KEY: &str = "AdminApiEndpoint";

/// Sub-path requested by the probe.
pub const DEFAULT_REQUEST_PATH: &str = "/chat/123abc/message";

/// Secret the probe sends when no override is configured.
pub const DEFAULT_PROBE_SECRET: &str = "something";

/// Settings shared by both authorizer binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerConfig {
    /// Name of the header compared against the secret.
    pub header_name: String,

    /// Expected secret value. `None` denies every request.
    pub expected_secret: Option<String>,

    /// Principal id placed in policy responses.
    pub principal_id: String,

    /// Decision rule used by the policy authorizer.
    pub policy_mode: PolicyMode,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_SECRET_HEADER.to_string(),
            expected_secret: None,
            principal_id: DEFAULT_PRINCIPAL_ID.to_string(),
            policy_mode: PolicyMode::Permissive,
        }
    }
}

/// Which rule the policy authorizer applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyMode {
    /// Allow everything. Provides no access control.
    #[default]
    Permissive,
    /// Allow only requests carrying the shared secret header.
    SecretHeader,
}

impl PolicyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::Permissive => "permissive",
            PolicyMode::SecretHeader => "secret-header",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(PolicyMode::Permissive),
            "secret-header" => Ok(PolicyMode::SecretHeader),
            other => Err(format!(
                "unknown policy mode '{}', expected 'permissive' or 'secret-header'",
                other
            )),
        }
    }
}

/// Settings for the admin endpoint probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Stack output to read the endpoint from.
    pub output_key: String,

    /// Path appended to the endpoint.
    pub request_path: String,

    /// Header carrying the secret.
    pub secret_header: String,

    /// Secret value sent with the request.
    pub secret_value: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            output_key: DEFAULT_OUTPUT_KEY.to_string(),
            request_path: DEFAULT_REQUEST_PATH.to_string(),
            secret_header: DEFAULT_SECRET_HEADER.to_string(),
            secret_value: DEFAULT_PROBE_SECRET.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_mode_parsing() {
        assert_eq!("permissive".parse::<PolicyMode>(), Ok(PolicyMode::Permissive));
        assert_eq!(" Secret-Header ".parse::<PolicyMode>(), Ok(PolicyMode::SecretHeader));
        assert!("allow-all".parse::<PolicyMode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let auth = AuthorizerConfig::default();
        assert_eq!(auth.header_name, "x-amz-secret");
        assert_eq!(auth.expected_secret, None);
        assert_eq!(auth.policy_mode, PolicyMode::Permissive);

        let probe = ProbeConfig::default();
        assert_eq!(probe.output_key, "AdminApiEndpoint");
        assert_eq!(probe.request_path, "/chat/123abc/message");
    }
}
