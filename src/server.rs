//! Server assembly and in-process startup.

use crate::api::{ApiDoc, create_router};
use crate::contract::Contract;
use crate::state::AppState;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application: stub routes, admin API, Swagger UI and
/// request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Serves the application on `listener` until the task is dropped.
///
/// # Errors
/// Returns error if the server fails.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}

/// A mock server running on a background task.
///
/// The server task is aborted on drop.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<AppState>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl MockServer {
    /// Starts a server for `contract` on an ephemeral localhost port.
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound.
    pub async fn start(contract: Contract) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Self::start_on(listener, contract)
    }

    /// Starts a server for `contract` on an existing listener.
    ///
    /// # Errors
    /// Returns error if the listener address cannot be read.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn start_on(listener: TcpListener, contract: Contract) -> std::io::Result<Self> {
        let addr = listener.local_addr()?;
        let state = Arc::new(AppState::new(contract));
        let handle = tokio::spawn(serve(listener, Arc::clone(&state)));
        info!("Mock server listening on {}", addr);

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Returns the bound address.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL, e.g. `http://127.0.0.1:40123`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the shared state, for journal inspection.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
