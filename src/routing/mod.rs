//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Proxy integration event (routeKey, headers, body)
//!     → sink.rs (serialize request to the diagnostic log)
//!     → matcher.rs (parse "VERB /template" into a RouteKey)
//!     → router.rs (exact lookup in the route table)
//!     → handlers.rs (placeholder chat handlers)
//!     → Return: handler response, 404, or 500 on log failure
//!
//! Route Compilation (at cold start):
//!     Router::chat()
//!     → register (method, template) pairs
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact match on the gateway route key, no path parsing
//! - Unmatched or unparseable keys are an explicit 404, not an error

pub mod handlers;
pub mod matcher;
pub mod router;
pub mod sink;

pub use matcher::RouteKey;
pub use router::{Dispatcher, Handler, HandlerError, InvocationContext, Router, RouterBuilder};
pub use sink::{RequestSink, TracingSink};
