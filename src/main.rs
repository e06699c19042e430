//! Orders Mock Server
//!
//! Serves the Orders contract as a stub provider.

use orders_mock::config::Config;
use orders_mock::contract::Contract;
use orders_mock::server::serve;
use orders_mock::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if given, then environment overrides
    let config = match std::env::var("ORDERS_MOCK_CONFIG") {
        Ok(path) => {
            info!("Loading config from {}", path);
            Config::load(&path)?
        }
        Err(_) => Config::default(),
    }
    .with_env_overrides()?;

    let contract = Contract::load(&config.contract.path)?;
    info!(
        "Loaded contract {} from {}",
        contract.provider,
        config.contract.path.display()
    );

    let state = Arc::new(
        AppState::new(contract).with_journal_limit(config.server.journal_limit),
    );

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    serve(listener, state).await?;

    Ok(())
}
