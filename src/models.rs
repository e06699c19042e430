//! Request and response models for the mock server.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of interactions currently served.
    pub interaction_count: usize,
}

/// A request received by the stub provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecordedRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Request path without query string.
    pub path: String,
    /// Raw query string, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Decoded query parameters. Repeated names keep the last value.
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
    /// Request body: decoded JSON, or the raw text when not JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
    /// Description of the interaction that answered, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl RecordedRequest {
    /// Builds a record from the parts of an incoming request.
    #[must_use]
    pub fn new(method: &str, path: &str, query: Option<&str>, body: &[u8]) -> Self {
        let query_params = query
            .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
            .map(|pairs| pairs.into_iter().collect())
            .unwrap_or_default();

        let body = if body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice(body)
                    .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned())),
            )
        };

        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            query: query.map(str::to_string),
            query_params,
            body,
            matched: None,
        }
    }
}
