//! Admin API request handlers.

use crate::contract::Interaction;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{HealthResponse, RecordedRequest};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/__admin/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Admin"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        interaction_count: state.interactions().len(),
    })
}

// ============================================================================
// Request Journal
// ============================================================================

/// List recorded requests, oldest first.
#[utoipa::path(
    get,
    path = "/__admin/requests",
    responses(
        (status = 200, description = "Recorded requests", body = [RecordedRequest])
    ),
    tag = "Journal"
)]
pub async fn list_requests(State(state): State<Arc<AppState>>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests())
}

/// Clear the request journal.
#[utoipa::path(
    delete,
    path = "/__admin/requests",
    responses(
        (status = 204, description = "Journal cleared")
    ),
    tag = "Journal"
)]
pub async fn clear_requests(State(state): State<Arc<AppState>>) -> StatusCode {
    state.clear_requests();
    StatusCode::NO_CONTENT
}

// ============================================================================
// Interactions
// ============================================================================

/// List interactions in match order.
#[utoipa::path(
    get,
    path = "/__admin/interactions",
    responses(
        (status = 200, description = "Served interactions", body = [Interaction])
    ),
    tag = "Interactions"
)]
pub async fn list_interactions(State(state): State<Arc<AppState>>) -> Json<Vec<Interaction>> {
    Json(state.interactions())
}

/// Register an interaction ahead of the existing ones.
#[utoipa::path(
    post,
    path = "/__admin/interactions",
    request_body = Interaction,
    responses(
        (status = 201, description = "Interaction registered", body = Interaction),
        (status = 400, description = "Invalid interaction", body = ErrorResponse)
    ),
    tag = "Interactions"
)]
pub async fn register_interaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Interaction>, JsonRejection>,
) -> Result<(StatusCode, Json<Interaction>), ApiError> {
    let Json(interaction) = payload?;
    state.register(interaction.clone())?;
    Ok((StatusCode::CREATED, Json(interaction)))
}
