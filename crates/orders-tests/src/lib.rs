//! Consumer contract tests for the Orders client.
//!
//! By default each test starts an in-process stub provider serving
//! `contracts/orders.toml` on an ephemeral port. Set `ORDERS_BASE_URL` to
//! also run the tests marked `#[ignore]` against an external provider.

use orders_client::{ClientConfig, OrdersClient};
use orders_mock::{Contract, MockServer};

/// Path of the bundled Orders contract.
pub const CONTRACT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../contracts/orders.toml");

/// Loads the bundled Orders contract.
///
/// # Panics
/// Panics if the contract file is missing or invalid.
#[must_use]
pub fn orders_contract() -> Contract {
    Contract::load(CONTRACT_PATH).expect("bundled contract should load")
}

/// Starts a stub provider for the bundled contract and a client pointed at it.
///
/// # Panics
/// Panics if the server cannot start or the client cannot be built.
pub async fn start_provider() -> (MockServer, OrdersClient) {
    let server = MockServer::start(orders_contract())
        .await
        .expect("mock server should start");
    let client = OrdersClient::new(ClientConfig {
        base_url: server.url(),
    })
    .expect("client should build");
    (server, client)
}

/// Gets the external provider URL from the environment, if configured.
#[must_use]
pub fn external_api_url() -> Option<String> {
    std::env::var("ORDERS_BASE_URL").ok()
}
