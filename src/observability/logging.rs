//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber once per process
//! - Pick the output format for the hosting environment
//! - Honour `RUST_LOG` over the built-in defaults
//!
//! # Design Decisions
//! - Lambda output has no ANSI colours and no timestamps (CloudWatch adds them)
//! - CLI logs go to stderr; stdout is reserved for the probe's report

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LAMBDA_DEFAULT_FILTER: &str = "info";
const CLI_DEFAULT_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Subscriber for the Lambda binaries.
pub fn init_lambda_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter(LAMBDA_DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .try_init();
}

/// Subscriber for the `admin-probe` CLI.
pub fn init_cli_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter(CLI_DEFAULT_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
