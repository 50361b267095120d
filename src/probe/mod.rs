//! Admin API endpoint probe.
//!
//! # Data Flow
//! ```text
//! start
//!     → config-loaded      (cli.rs args, ProbeConfig, AWS profile credentials)
//!     → stack-described    (stack.rs, CloudFormation DescribeStacks)
//!     → endpoint-extracted (stack.rs, output key lookup)
//!     → request-sent       (invoke.rs, GET with secret header)
//!     → response-parsed    (invoke.rs, JSON object)
//!     → done
//! ```
//! Any transition can fail; the binary prints the error and exits 1.
//!
//! # Design Decisions
//! - Stack lookup sits behind [`StackDescriber`] so runs need no cloud
//! - stdout carries the human report only; logs go to stderr
//! - No retries and no timeouts beyond client defaults

pub mod cli;
pub mod invoke;
pub mod stack;

use std::io::Write;

use thiserror::Error;

use crate::config::{ConfigError, ProbeConfig};

pub use cli::Args;
pub use invoke::{endpoint_url, invoke_endpoint, ProbeReport};
pub use stack::{find_output, CloudFormationDescriber, DescribedStack, StackDescriber, StackOutput};

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no credentials provider configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("unable to load credentials for profile '{profile}': {reason}")]
    Credentials { profile: String, reason: String },

    #[error("unable to describe stack '{stack}': {reason}")]
    DescribeStack { stack: String, reason: String },

    #[error("{key} not found in stack outputs")]
    OutputNotFound { key: String },

    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid value for header {header}")]
    InvalidHeader { header: String },

    #[error("failed to send request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ProbeError {
    /// Step of the probe that failed, for operator messages.
    pub fn stage(&self) -> &'static str {
        match self {
            ProbeError::Config(_) => "loading probe config",
            ProbeError::NoCredentials { .. } | ProbeError::Credentials { .. } => {
                "loading AWS config"
            }
            ProbeError::DescribeStack { .. } | ProbeError::OutputNotFound { .. } => {
                "getting API endpoint"
            }
            ProbeError::InvalidUrl { .. }
            | ProbeError::InvalidHeader { .. }
            | ProbeError::Request { .. }
            | ProbeError::ReadBody(_)
            | ProbeError::Parse(_)
            | ProbeError::Output(_) => "invoking endpoint",
        }
    }
}

/// Resolve the endpoint from `stack` and probe it, writing the report to `out`.
pub async fn run<D, W>(
    stack: &str,
    describer: &D,
    client: &reqwest::Client,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ProbeReport, ProbeError>
where
    D: StackDescriber + ?Sized,
    W: Write,
{
    tracing::debug!(stack, "Describing stack");
    let stacks = describer.describe(stack).await?;

    let endpoint = find_output(&stacks, &config.output_key)?;
    tracing::debug!(endpoint = %endpoint, output_key = %config.output_key, "Endpoint resolved");

    let url = endpoint_url(&endpoint, &config.request_path)?;
    invoke_endpoint(client, url, config, out).await
}

/// Full CLI flow against the real AWS account selected by `args.profile`.
pub async fn execute(args: &Args) -> Result<ProbeReport, ProbeError> {
    let config = crate::config::load_probe_config(crate::config::loader::env_lookup)?;
    let describer = CloudFormationDescriber::connect(&args.profile).await?;
    let client = reqwest::Client::new();

    let mut stdout = std::io::stdout();
    run(&args.stack, &describer, &client, &config, &mut stdout).await
}
