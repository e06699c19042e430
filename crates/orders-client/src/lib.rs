//! HTTP client library for the Orders API.
//!
//! This crate provides a typed async client for the `/orders` resource. Each
//! operation builds one request, dispatches it over `reqwest`, and classifies
//! the response into a decoded payload or an [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use orders_client::{ClientConfig, OrderStatus, OrdersClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), orders_client::Error> {
//!     let client = OrdersClient::new(ClientConfig {
//!         base_url: "http://localhost:4010".into(),
//!     })?;
//!
//!     let orders = client.list_orders(Some(OrderStatus::New.as_str())).await?;
//!     println!("{} new orders", orders.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Status mapping
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | decoded payload |
//! | 400 | [`Error::BadRequest`] |
//! | 404 | [`Error::NotFound`] |
//! | 409 | [`Error::Conflict`] |
//! | other | [`Error::RequestFailed`] |

mod client;
mod error;
mod types;

pub use client::{ClientConfig, OrdersClient};
pub use error::{Error, ErrorKind};
pub use types::*;
