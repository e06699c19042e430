//! # Orders Mock - Contract Stub Provider
//!
//! A stub HTTP provider for the Orders API, built with
//! [Axum](https://crates.io/crates/axum). It serves a declarative contract
//! of request/response interactions, records every request it receives, and
//! exposes an admin API to inspect the journal and register interactions at
//! runtime.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Admin handlers, stub fallback and router |
//! | [`config`] | TOML server configuration |
//! | [`contract`] | Contract model, loading and request matching |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Admin DTOs and the recorded request type |
//! | [`server`] | Application assembly and in-process startup |
//! | [`state`] | Interactions and request journal |
//!
//! ## Admin Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/__admin/health` | Health check |
//! | GET | `/__admin/requests` | Recorded requests |
//! | DELETE | `/__admin/requests` | Clear the journal |
//! | GET | `/__admin/interactions` | Interactions in match order |
//! | POST | `/__admin/interactions` | Register an interaction |
//!
//! Any other request is matched against the contract. The first matching
//! interaction answers; unmatched requests get a 404 with
//! `{"code":"NO_MATCHING_INTERACTION"}`.
//!
//! ## Starting the Server
//!
//! ```bash
//! # Serves contracts/orders.toml on 127.0.0.1:4010
//! cargo run
//!
//! # With a config file and overrides
//! ORDERS_MOCK_CONFIG=config/mock-server.toml PORT=5000 cargo run
//! ```
//!
//! ## In-process Use
//!
//! ```no_run
//! use orders_mock::{Contract, MockServer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let contract = Contract::load("contracts/orders.toml")?;
//! let server = MockServer::start(contract).await?;
//! println!("serving on {}", server.url());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod contract;
pub mod error;
pub mod models;
pub mod server;
pub mod state;

pub use contract::{Contract, Interaction, RequestPattern, StubResponse};
pub use server::MockServer;
