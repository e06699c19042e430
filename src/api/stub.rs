//! Serves contract interactions for every non-admin request.

use crate::contract::StubResponse;
use crate::error::ApiError;
use crate::models::RecordedRequest;
use crate::state::AppState;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fallback handler: records the request and answers with the first
/// matching interaction.
pub async fn serve_interaction(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let mut request = RecordedRequest::new(method.as_str(), uri.path(), uri.query(), &body);

    let Some(interaction) = state.find(&request) else {
        warn!("No interaction matches {} {}", request.method, uri);
        let error = ApiError::NoMatchingInteraction {
            method: request.method.clone(),
            path: request.path.clone(),
        };
        state.record(request);
        return error.into_response();
    };

    debug!(
        "Matched {} {} to '{}'",
        request.method, uri, interaction.description
    );
    request.matched = Some(interaction.description);
    state.record(request);

    build_response(&interaction.response).unwrap_or_else(IntoResponse::into_response)
}

/// Converts a canned response into an HTTP response.
///
/// # Errors
/// Returns error if a header or the body cannot be encoded.
pub fn build_response(stub: &StubResponse) -> Result<Response, ApiError> {
    let status = StatusCode::from_u16(stub.status)
        .map_err(|e| ApiError::Internal(format!("invalid status {}: {}", stub.status, e)))?;

    let body = match &stub.body {
        Some(value) => Body::from(
            serde_json::to_vec(value).map_err(|e| ApiError::Internal(e.to_string()))?,
        ),
        None => Body::empty(),
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    if stub.body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    for (name, value) in &stub.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::Internal(format!("invalid header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::Internal(format!("invalid header value {}: {}", value, e)))?;
        headers.insert(name, value);
    }

    Ok(response)
}
