//! OpenAPI documentation of the admin API.

use crate::contract::{Interaction, RequestPattern, StubResponse};
use crate::error::ErrorResponse;
use crate::models::{HealthResponse, RecordedRequest};
use utoipa::OpenApi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_check,
        crate::api::handlers::list_requests,
        crate::api::handlers::clear_requests,
        crate::api::handlers::list_interactions,
        crate::api::handlers::register_interaction,
    ),
    components(
        schemas(
            HealthResponse,
            RecordedRequest,
            Interaction,
            RequestPattern,
            StubResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Admin", description = "Mock server status"),
        (name = "Journal", description = "Recorded requests"),
        (name = "Interactions", description = "Contract interactions"),
    ),
    info(
        title = "Orders Mock Admin API",
        version = "0.1.0",
        description = "Admin API of the Orders contract stub provider",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
