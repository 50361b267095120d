//! Request authorization.
//!
//! # Data Flow
//! ```text
//! Authorizer event (headers, route/method ARN)
//!     → secret_header.rs (compare shared secret, simple response)
//!     → policy.rs (build IAM policy for the method ARN)
//!     → response envelope returned to the gateway
//! ```
//!
//! # Design Decisions
//! - Decisions are pure functions of the event and the loaded config
//! - Missing headers or secrets are a deny, never an error
//! - The always-allow authorizer is a named variant, never a default branch

pub mod policy;
pub mod secret_header;

pub use policy::PolicyAuthorizer;
pub use secret_header::{SecretDecision, SecretHeaderAuthorizer};
