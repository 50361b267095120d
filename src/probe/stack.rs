//! Stack output lookup.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudformation::error::DisplayErrorContext;

use crate::probe::ProbeError;

/// One declared output of a deployed stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
}

impl StackOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribedStack {
    pub name: String,
    pub outputs: Vec<StackOutput>,
}

/// Source of stack descriptions.
#[async_trait]
pub trait StackDescriber: Send + Sync {
    async fn describe(&self, stack: &str) -> Result<Vec<DescribedStack>, ProbeError>;
}

/// First output named `key` across all stacks, in order.
pub fn find_output(stacks: &[DescribedStack], key: &str) -> Result<String, ProbeError> {
    stacks
        .iter()
        .flat_map(|stack| stack.outputs.iter())
        .find(|output| output.key == key)
        .map(|output| output.value.clone())
        .ok_or_else(|| ProbeError::OutputNotFound {
            key: key.to_string(),
        })
}

/// CloudFormation-backed describer.
#[derive(Debug, Clone)]
pub struct CloudFormationDescriber {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationDescriber {
    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }

    /// Load shared config for `profile` and resolve its credentials up front,
    /// so a bad profile fails before any stack call.
    pub async fn connect(profile: &str) -> Result<Self, ProbeError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| ProbeError::NoCredentials {
                profile: profile.to_string(),
            })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| ProbeError::Credentials {
                profile: profile.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!(profile, region = ?sdk_config.region(), "AWS config loaded");
        Ok(Self::new(aws_sdk_cloudformation::Client::new(&sdk_config)))
    }
}

#[async_trait]
impl StackDescriber for CloudFormationDescriber {
    async fn describe(&self, stack: &str) -> Result<Vec<DescribedStack>, ProbeError> {
        let response = self
            .client
            .describe_stacks()
            .stack_name(stack)
            .send()
            .await
            .map_err(|e| ProbeError::DescribeStack {
                stack: stack.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        // Outputs without a key or value cannot be looked up and are skipped.
        let stacks = response
            .stacks()
            .iter()
            .map(|s| DescribedStack {
                name: s.stack_name().unwrap_or_default().to_string(),
                outputs: s
                    .outputs()
                    .iter()
                    .filter_map(|o| Some(StackOutput::new(o.output_key()?, o.output_value()?)))
                    .collect(),
            })
            .collect();

        Ok(stacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(name: &str, outputs: &[(&str, &str)]) -> DescribedStack {
        DescribedStack {
            name: name.to_string(),
            outputs: outputs.iter().map(|(k, v)| StackOutput::new(*k, *v)).collect(),
        }
    }

    #[test]
    fn test_finds_output_by_exact_key() {
        let stacks = vec![stack(
            "demo-stack",
            &[
                ("UserApiEndpoint", "https://user.example.com"),
                ("AdminApiEndpoint", "https://api.example.com"),
            ],
        )];

        assert_eq!(
            find_output(&stacks, "AdminApiEndpoint").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_scans_every_stack() {
        let stacks = vec![
            stack("first", &[("Other", "x")]),
            stack("second", &[("AdminApiEndpoint", "https://second.example.com")]),
        ];

        assert_eq!(
            find_output(&stacks, "AdminApiEndpoint").unwrap(),
            "https://second.example.com"
        );
    }

    #[test]
    fn test_missing_output_names_the_key() {
        let stacks = vec![stack("demo-stack", &[("adminapiendpoint", "https://x")])];

        let err = find_output(&stacks, "AdminApiEndpoint").unwrap_err();
        assert!(matches!(err, ProbeError::OutputNotFound { ref key } if key == "AdminApiEndpoint"));
        assert!(err.to_string().contains("AdminApiEndpoint"));
    }

    #[test]
    fn test_no_stacks() {
        assert!(find_output(&[], "AdminApiEndpoint").is_err());
    }
}
