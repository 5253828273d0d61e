//! Application response → API Gateway event-response.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::BTreeMap;

use crate::models::response::{EventResponse, Response};

/// Flattens an application response into the event-response shape.
///
/// `headers` is a plain map, so when a header name repeats only the last
/// value survives there. In that case every value is also carried in
/// `multiValueHeaders`, which API Gateway merges back into repeated lines.
/// Bodies that are not valid UTF-8 are base64-encoded and flagged.
#[must_use]
pub fn translate_response(response: Response) -> EventResponse {
    let mut headers = BTreeMap::new();
    let mut multi: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut repeated = false;

    for (name, value) in response.headers {
        let values = multi.entry(name.clone()).or_default();
        values.push(value.clone());
        repeated |= values.len() > 1;
        headers.insert(name, value);
    }

    let (body, is_base64_encoded) = match String::from_utf8(response.body) {
        Ok(text) => (text, false),
        Err(e) => (STANDARD.encode(e.as_bytes()), true),
    };

    EventResponse {
        status_code: response.status,
        headers,
        multi_value_headers: repeated.then_some(multi),
        body,
        is_base64_encoded,
    }
}
