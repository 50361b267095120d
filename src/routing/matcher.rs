//! Route key parsing.
//!
//! # Responsibilities
//! - Split a gateway route key into method and path template
//! - Compare keys exactly (method and template are case-sensitive)
//!
//! # Design Decisions
//! - The path template is opaque: `{chat_id}` is never expanded
//! - Keys without a single separating space (e.g. `$default`) do not parse

use std::fmt;

use http::Method;

/// Composite dispatch key: HTTP verb plus path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    method: Method,
    path_template: String,
}

impl RouteKey {
    pub fn new(method: Method, path_template: impl Into<String>) -> Self {
        Self {
            method,
            path_template: path_template.into(),
        }
    }

    /// Parse `"<VERB> <path-template>"` as sent in the gateway `routeKey`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (verb, template) = raw.split_once(' ')?;
        if template.is_empty() || template.contains(' ') {
            return None;
        }
        let method = Method::from_bytes(verb.as_bytes()).ok()?;
        Some(Self::new(method, template))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_template)
    }
}
