//! Proxy event → canonical environment.
//!
//! Each environment field is derived by its own small function so the rules
//! can be exercised independently.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::tracing::debug;
use serde_json::Value;

use crate::config::TranslatorConfig;
use crate::models::environ::Environ;
use crate::models::error::{AdapterError, AdapterResult};
use crate::models::event::ProxyEvent;

const DEFAULT_SERVER_PORT: &str = "80";
const DEFAULT_SCHEME: &str = "http";
const SERVER_PROTOCOL: &str = "HTTP/1.1";

/// Translates a raw event using the default configuration.
///
/// # Errors
///
/// Returns `InvalidEvent` if `httpMethod` or `path` is missing, or the body
/// is flagged as base64 but cannot be decoded.
pub fn translate_request(payload: Value) -> AdapterResult<Environ> {
    translate_request_with(&TranslatorConfig::default(), payload)
}

/// Translates a raw event.
///
/// # Errors
///
/// Returns `InvalidEvent` if the payload is not a well-formed proxy event.
pub fn translate_request_with(config: &TranslatorConfig, payload: Value) -> AdapterResult<Environ> {
    let event: ProxyEvent = serde_json::from_value(payload)
        .map_err(|e| AdapterError::InvalidEvent(e.to_string()))?;
    build_environ(config, &event)
}

/// Builds the environment for an already-parsed event.
///
/// # Errors
///
/// Returns `InvalidEvent` if a base64 body cannot be decoded.
pub fn build_environ(config: &TranslatorConfig, event: &ProxyEvent) -> AdapterResult<Environ> {
    let body = decode_body(event)?;
    let content_length = content_length(event, body.len());

    let mut environ = Environ::with_body(body);
    environ.content_length = content_length;
    environ.content_type = event.header("Content-Type").unwrap_or_default().to_string();
    environ.path_info.clone_from(&event.path);
    environ.query_string = query_string(&event.query_pairs());
    environ.remote_addr = remote_addr(event.header("X-Forwarded-For")).to_string();
    environ.remote_user = event.principal_id().unwrap_or_default().to_string();
    environ.request_method.clone_from(&event.http_method);
    environ.script_name = script_name(event.header("Host"), event.stage(), &config.domain_suffix);
    environ.server_name = event
        .header("Host")
        .unwrap_or(config.fallback_server_name.as_str())
        .to_string();
    environ.server_port = event
        .header("X-Forwarded-Port")
        .unwrap_or(DEFAULT_SERVER_PORT)
        .to_string();
    environ.server_protocol = SERVER_PROTOCOL.to_string();
    environ.url_scheme = event
        .header("X-Forwarded-Proto")
        .unwrap_or(DEFAULT_SCHEME)
        .to_string();

    for (name, value) in event.headers() {
        environ.insert_header(name, value);
    }

    debug!(
        method = %environ.request_method,
        path = %environ.path_info,
        script_name = %environ.script_name,
        content_length = %environ.content_length,
        "Built request environment"
    );

    Ok(environ)
}

/// Mount prefix: `/<stage>` for API Gateway's default domain, empty for
/// custom domains (which do not inject the stage into the path).
#[must_use]
pub fn script_name(host: Option<&str>, stage: &str, domain_suffix: &str) -> String {
    if host.is_some_and(|h| h.ends_with(domain_suffix)) {
        format!("/{stage}")
    } else {
        String::new()
    }
}

/// Percent-encodes query pairs as `k=v&k=v`, sorted by key.
///
/// The sort is stable, so repeated keys keep their relative order.
#[must_use]
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut sorted = pairs.to_vec();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Client address: the first hop of `X-Forwarded-For`.
#[must_use]
pub fn remote_addr(forwarded_for: Option<&str>) -> &str {
    forwarded_for
        .and_then(|v| v.split(", ").next())
        .unwrap_or_default()
}

/// `Content-Length` header if present, else the decoded body length.
#[must_use]
pub fn content_length(event: &ProxyEvent, body_len: usize) -> String {
    event
        .header("Content-Length")
        .map_or_else(|| body_len.to_string(), str::to_string)
}

/// Decodes the event body into bytes.
///
/// # Errors
///
/// Returns `InvalidEvent` if `isBase64Encoded` is set and the body is not
/// valid base64.
pub fn decode_body(event: &ProxyEvent) -> AdapterResult<Vec<u8>> {
    let Some(body) = event.body.as_deref() else {
        return Ok(Vec::new());
    };

    if event.is_base64_encoded() {
        STANDARD
            .decode(body)
            .map_err(|e| AdapterError::InvalidEvent(format!("body is not valid base64: {e}")))
    } else {
        Ok(body.as_bytes().to_vec())
    }
}
