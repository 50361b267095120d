//! Diagnostic request log.

use crate::config::schema::DEFAULT_SECRET_HEADER;
use crate::events::HttpRequest;

const REDACTED: &str = "***";

/// Destination for the serialized inbound request.
///
/// A failing sink makes the dispatcher answer 500 without running a handler.
pub trait RequestSink: Send + Sync {
    fn record(&self, request: &HttpRequest) -> Result<(), serde_json::Error>;
}

/// Serializes the request to JSON and emits it as a `tracing` event.
///
/// The value of the secret header is masked before serialization.
#[derive(Debug, Clone)]
pub struct TracingSink {
    secret_header: String,
}

impl TracingSink {
    pub fn new(secret_header: impl Into<String>) -> Self {
        Self {
            secret_header: secret_header.into(),
        }
    }

    fn render(&self, request: &HttpRequest) -> Result<String, serde_json::Error> {
        if request.headers.get_ignore_case(&self.secret_header).is_none() {
            return serde_json::to_string(request);
        }
        let mut masked = request.clone();
        masked.headers.redact(&self.secret_header, REDACTED);
        serde_json::to_string(&masked)
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_HEADER)
    }
}

impl RequestSink for TracingSink {
    fn record(&self, request: &HttpRequest) -> Result<(), serde_json::Error> {
        let json = self.render(request)?;
        tracing::info!(route_key = %request.route_key, request = %json, "Incoming request");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_accepts_any_request() {
        let mut request = HttpRequest::new("GET /chat");
        request.body = Some("{\"hello\":\"world\"}".into());
        request.headers.insert("x-amz-secret", "something");

        assert!(TracingSink::default().record(&request).is_ok());
    }

    #[test]
    fn test_secret_header_is_masked_in_any_casing() {
        let mut request = HttpRequest::new("GET /chat");
        request.headers.insert("X-Amz-Secret", "something");
        request.headers.insert("accept", "*/*");

        let json = TracingSink::default().render(&request).unwrap();

        assert!(!json.contains("something"));
        assert!(json.contains(r#""X-Amz-Secret":"***""#));
        assert!(json.contains(r#""accept":"*/*""#));
        // The request handed to the route is untouched.
        assert_eq!(request.headers.get_ignore_case("x-amz-secret"), Some("something"));
    }

    #[test]
    fn test_custom_secret_header() {
        let mut request = HttpRequest::new("GET /chat");
        request.headers.insert("x-admin-key", "hunter2");

        let json = TracingSink::new("X-Admin-Key").render(&request).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
