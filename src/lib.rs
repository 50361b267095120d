//! Chat API gateway handlers.
//!
//! Lambda authorizers and the chat proxy router, plus the `admin-probe`
//! support code that resolves the deployed admin API and calls it.

pub mod config;
pub mod events;
pub mod observability;
pub mod probe;
pub mod routing;
pub mod security;

pub use config::{AuthorizerConfig, ProbeConfig};
pub use routing::{Dispatcher, Router};
pub use security::{PolicyAuthorizer, SecretHeaderAuthorizer};
