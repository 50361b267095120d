//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (or an injected lookup in tests)
//!     → loader.rs (read & parse values)
//!     → validation.rs (semantic checks)
//!     → AuthorizerConfig / ProbeConfig (validated, immutable)
//!     → captured by the handler closure at cold start
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new value requires a new cold start
//! - All fields have defaults except the expected secret
//! - Validation returns every problem found, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_authorizer_config, load_probe_config, ConfigError};
pub use schema::{AuthorizerConfig, PolicyMode, ProbeConfig};
