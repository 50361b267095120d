//! HTTP API (payload format 2.0) proxy integration envelopes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{nullable, Headers};

/// Proxy integration request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpRequest {
    pub version: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub route_key: String,
    pub raw_path: Option<String>,
    pub raw_query_string: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cookies: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub headers: Headers,
    #[serde(deserialize_with = "nullable")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub path_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub stage_variables: HashMap<String, String>,
    pub request_context: Option<Value>,
    pub body: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub is_base64_encoded: bool,
}

impl HttpRequest {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            ..Self::default()
        }
    }
}

/// Proxy integration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    /// A plain-text response with no extra headers.
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: body.into(),
            is_base64_encoded: false,
        }
    }

    pub fn not_found() -> Self {
        Self::text(404, "Not Found")
    }

    pub fn internal_error() -> Self {
        Self::text(500, "Internal Server Error")
    }
}
