//! Route configuration.

use crate::api::{handlers, stub};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
///
/// Admin endpoints live under `/__admin`; everything else is answered from
/// the contract.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/__admin/health", get(handlers::health_check))
        // Request journal
        .route(
            "/__admin/requests",
            get(handlers::list_requests).delete(handlers::clear_requests),
        )
        // Interactions
        .route(
            "/__admin/interactions",
            get(handlers::list_interactions).post(handlers::register_interaction),
        )
        // Contract stubs
        .fallback(stub::serve_interaction)
        .with_state(state)
}
