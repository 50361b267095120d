//! Gateway invocation contracts.
//!
//! # Data Flow
//! ```text
//! API Gateway (payload format 2.0 / REST authorizer)
//!     → JSON event
//!     → authorizer.rs / http.rs (serde types)
//!     → security / routing (decision or response)
//!     → JSON response envelope back to the gateway
//! ```
//!
//! # Design Decisions
//! - Only the fields the handlers read are typed; everything else of the
//!   request context is kept as raw JSON so the diagnostic log stays complete
//! - Header lookup is always case-insensitive

pub mod authorizer;
pub mod headers;
pub mod http;

pub use authorizer::{
    AuthorizerContext, PolicyAuthorizerRequest, PolicyAuthorizerResponse, PolicyDocument,
    PolicyEffect, PolicyStatement, SimpleAuthorizerRequest, SimpleAuthorizerResponse,
    INVOKE_ACTION, POLICY_VERSION,
};
pub use headers::Headers;
pub use self::http::{HttpRequest, HttpResponse};

use serde::{Deserialize, Deserializer};

/// Deserialize a field the gateway may send as `null`, falling back to the
/// type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
