//! API Gateway proxy event models.
//!
//! These types define the request record the Lambda host delivers in place
//! of a socket connection, and the response record it expects back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API Gateway REST "proxy" integration event.
///
/// Maps are `BTreeMap` so header and query iteration order is deterministic
/// for a given event.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub multi_value_query_string_parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
    #[serde(default)]
    pub request_context: RequestContext,
}

/// Deployment and identity metadata attached by API Gateway.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

/// Custom or Cognito authorizer output.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Authorizer {
    #[serde(default)]
    pub principal_id: Option<String>,
}

impl ProxyEvent {
    /// Looks up a header by name, ignoring ASCII case.
    ///
    /// When several names match, the first in iteration order wins.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All headers in deterministic iteration order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query parameters as ordered key/value pairs.
    ///
    /// The multi-value map is preferred when API Gateway supplied one, so
    /// repeated keys are kept.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        if let Some(multi) = &self.multi_value_query_string_parameters
            && !multi.is_empty()
        {
            return multi
                .iter()
                .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
                .collect();
        }

        self.query_string_parameters
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[must_use]
    pub fn stage(&self) -> &str {
        self.request_context.stage.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn principal_id(&self) -> Option<&str> {
        self.request_context
            .authorizer
            .as_ref()
            .and_then(|a| a.principal_id.as_deref())
    }

    #[must_use]
    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }
}
