//! Consumer/provider contract: the interactions the stub provider serves.
//!
//! A contract is a TOML document listing request patterns and the canned
//! response for each:
//!
//! ```toml
//! consumer = "OrdersConsumer"
//! provider = "OrdersProvider"
//!
//! [[interactions]]
//! description = "get order ok"
//! request = { method = "GET", path = "/orders/1" }
//! response = { status = 200, body = { id = 1, customerName = "Alice", status = "PROCESSING", totalAmount = 120.5 } }
//! ```

use crate::models::RecordedRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use utoipa::ToSchema;


const KNOWN_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Contract error types.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Failed to read the contract file.
    #[error("failed to read contract file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the TOML contract.
    #[error("failed to parse contract: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Contract content is structurally invalid.
    #[error("invalid interaction: {0}")]
    InvalidInteraction(String),
}

/// A set of interactions agreed between a consumer and a provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Contract {
    /// Consumer name.
    pub consumer: String,
    /// Provider name.
    pub provider: String,
    /// Interactions in match order.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// One expected request and the response served for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Interaction {
    /// Human-readable description, echoed in the request journal.
    pub description: String,
    /// Request matcher.
    pub request: RequestPattern,
    /// Canned response.
    pub response: StubResponse,
}

/// Request matcher.
///
/// The path is compared without its query string; query and body
/// constraints are checked independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RequestPattern {
    /// HTTP method, compared case-insensitively.
    pub method: String,
    /// Exact request path, e.g. `/orders/1`.
    pub path: String,
    /// Query parameters that must be present with these exact values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
    /// Query parameters that must not be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_absent: Vec<String>,
    /// Top-level JSON body fields that must be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_fields: Vec<String>,
    /// Top-level JSON body fields that must be absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_absent: Vec<String>,
    /// JSON the body must contain. Objects may carry extra fields; arrays
    /// must have the same length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
}

/// Canned response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StubResponse {
    /// HTTP status code.
    pub status: u16,
    /// Extra response headers, e.g. `Location`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// JSON body; served with `Content-Type: application/json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
}

impl Contract {
    /// Loads a contract from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContractError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a contract from a TOML string.
    ///
    /// # Errors
    /// Returns error if the content cannot be parsed or validated.
    pub fn parse(content: &str) -> Result<Self, ContractError> {
        let contract: Contract = toml::from_str(content)?;
        contract.validate()?;
        Ok(contract)
    }

    /// Returns the first interaction matching `request`.
    #[must_use]
    pub fn find(&self, request: &RecordedRequest) -> Option<&Interaction> {
        self.interactions
            .iter()
            .find(|interaction| interaction.request.matches(request))
    }

    fn validate(&self) -> Result<(), ContractError> {
        if self.interactions.is_empty() {
            return Err(ContractError::InvalidInteraction(
                "at least one interaction must be declared".to_string(),
            ));
        }
        self.interactions.iter().try_for_each(Interaction::validate)
    }
}

impl Interaction {
    /// Checks method, path and status.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidInteraction`] naming the offending
    /// interaction.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.description.is_empty() {
            return Err(ContractError::InvalidInteraction(
                "description cannot be empty".to_string(),
            ));
        }

        let method = self.request.method.to_ascii_uppercase();
        let reason = if !KNOWN_METHODS.contains(&method.as_str()) {
            Some(format!("unknown method {}", self.request.method))
        } else if !self.request.path.starts_with('/') {
            Some(format!("path {} must start with '/'", self.request.path))
        } else if self.request.path.contains('?') {
            Some("path must not carry a query string, use `query`".to_string())
        } else if !(100..=599).contains(&self.response.status) {
            Some(format!("invalid status {}", self.response.status))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ContractError::InvalidInteraction(format!(
                "{}: {}",
                self.description, reason
            ))),
            None => Ok(()),
        }
    }
}

impl RequestPattern {
    /// Returns whether `request` satisfies every constraint of this pattern.
    #[must_use]
    pub fn matches(&self, request: &RecordedRequest) -> bool {
        self.method.eq_ignore_ascii_case(&request.method)
            && self.path == request.path
            && self
                .query
                .iter()
                .all(|(name, value)| request.query_params.get(name) == Some(value))
            && self
                .query_absent
                .iter()
                .all(|name| !request.query_params.contains_key(name))
            && self.body_fields.iter().all(|field| has_field(request, field))
            && self.body_absent.iter().all(|field| !has_field(request, field))
            && self.body.as_ref().is_none_or(|expected| {
                request
                    .body
                    .as_ref()
                    .is_some_and(|actual| json_contains(actual, expected))
            })
    }
}

fn has_field(request: &RecordedRequest, field: &str) -> bool {
    request
        .body
        .as_ref()
        .and_then(Value::as_object)
        .is_some_and(|object| object.contains_key(field))
}

/// Returns whether `actual` contains `expected`.
fn json_contains(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => expected.iter().all(|(key, value)| {
            actual
                .get(key)
                .is_some_and(|actual| json_contains(actual, value))
        }),
        (Value::Array(actual), Value::Array(expected)) => {
            actual.len() == expected.len()
                && actual
                    .iter()
                    .zip(expected)
                    .all(|(actual, expected)| json_contains(actual, expected))
        }
        (Value::Number(actual), Value::Number(expected)) => actual.as_f64() == expected.as_f64(),
        _ => actual == expected,
    }
}
