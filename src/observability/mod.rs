//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured `tracing` events)
//!
//! Consumers:
//!     → CloudWatch Logs (Lambda stdout)
//!     → operator terminal (CLI stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Lambda request id attached as a span field by the dispatcher
//! - Secrets are never recorded

pub mod logging;

pub use logging::{init_cli_logging, init_lambda_logging};
