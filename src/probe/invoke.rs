//! Diagnostic request against the resolved endpoint.

use std::io::Write;

use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{Map, Value};
use url::Url;

use crate::config::ProbeConfig;
use crate::probe::ProbeError;

/// What the probe saw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub url: Url,
    pub status: u16,
    pub raw_body: String,
    pub parsed: Map<String, Value>,
}

/// Join the endpoint and sub-path without doubling the separator.
pub fn endpoint_url(endpoint: &str, path: &str) -> Result<Url, ProbeError> {
    let joined = format!("{}{}", endpoint.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|source| ProbeError::InvalidUrl {
        url: joined,
        source,
    })
}

/// GET `url` with the configured secret header and report the response.
///
/// Writes the URL, the raw body and the parsed object to `out`, in that order.
pub async fn invoke_endpoint<W: Write>(
    client: &reqwest::Client,
    url: Url,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ProbeReport, ProbeError> {
    let invalid_header = || ProbeError::InvalidHeader {
        header: config.secret_header.clone(),
    };
    let name =
        HeaderName::from_bytes(config.secret_header.as_bytes()).map_err(|_| invalid_header())?;
    let value = HeaderValue::from_str(&config.secret_value).map_err(|_| invalid_header())?;

    writeln!(out, "{}", url)?;

    let response = client
        .get(url.clone())
        .header(name, value)
        .send()
        .await
        .map_err(|source| ProbeError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), url = %url, "Endpoint returned an error status");
    }

    let raw_body = response.text().await.map_err(ProbeError::ReadBody)?;
    writeln!(out, "{}", raw_body)?;

    let parsed: Map<String, Value> = serde_json::from_str(&raw_body)?;
    writeln!(out, "Response: {:#}", Value::Object(parsed.clone()))?;

    Ok(ProbeReport {
        url,
        status: status.as_u16(),
        raw_body,
        parsed,
    })
}
