//! HTTP client for the Orders API.

use crate::error::Error;
use crate::types::*;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:4010").
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4010".to_string(),
        }
    }
}

/// HTTP client for the Orders resource.
///
/// Holds no state besides the base URL and the transport; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    client: Client,
    base_url: String,
}

impl OrdersClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().build()?;
        Self::with_http_client(config, client)
    }

    /// Creates a new client for the given base URL.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
        })
    }

    /// Creates a new client on top of a caller-configured transport.
    ///
    /// Timeouts, proxies and TLS settings of `client` apply to every call.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Lists orders, optionally filtered by status.
    ///
    /// The `status` query parameter is only sent when `status` is `Some`.
    /// Its value is not validated client-side.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_orders(&self, status: Option<&str>) -> Result<Vec<Order>, Error> {
        let url = self.orders_url(status);
        let resp = self.send(self.request(Method::GET, &url)).await?;
        handle_response(resp).await
    }

    /// Gets an order by ID.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the order does not exist.
    pub async fn get_order(&self, id: i64) -> Result<Order, Error> {
        let url = self.order_url(id);
        let resp = self.send(self.request(Method::GET, &url)).await?;
        handle_response(resp).await
    }

    /// Creates an order.
    ///
    /// # Errors
    /// Returns [`Error::BadRequest`] if the server rejects the body.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, Error> {
        let url = self.orders_url(None);
        let resp = self
            .send(self.request(Method::POST, &url).json(order))
            .await?;
        handle_response(resp).await
    }

    /// Replaces an order.
    ///
    /// # Errors
    /// Returns [`Error::Conflict`] on a server-reported version clash.
    pub async fn put_order(&self, id: i64, order: &OrderReplacement) -> Result<Order, Error> {
        self.send_order_body(Method::PUT, id, order).await
    }

    /// Partially updates an order.
    ///
    /// # Errors
    /// Returns [`Error::BadRequest`] if the server rejects the patch.
    pub async fn patch_order(&self, id: i64, patch: &OrderPatch) -> Result<Order, Error> {
        self.send_order_body(Method::PATCH, id, patch).await
    }

    /// Deletes an order. The response body is never read.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_order(&self, id: i64) -> Result<(), Error> {
        let url = self.order_url(id);
        let resp = self.send(self.client.delete(&url)).await?;
        handle_empty_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    pub(crate) fn orders_url(&self, status: Option<&str>) -> String {
        let mut url = format!("{}/orders", self.base_url);
        let params = serde_urlencoded::to_string(ListOrdersQuery { status }).unwrap_or_default();
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params);
        }
        url
    }

    pub(crate) fn order_url(&self, id: i64) -> String {
        format!("{}/orders/{}", self.base_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url).header(ACCEPT, "application/json")
    }

    async fn send_order_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        id: i64,
        body: &B,
    ) -> Result<Order, Error> {
        let url = self.order_url(id);
        let resp = self.send(self.request(method, &url).json(body)).await?;
        handle_response(resp).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let request = builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending orders request");
        let resp = self.client.execute(request).await?;
        debug!(status = resp.status().as_u16(), "received orders response");
        Ok(resp)
    }
}

async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    let status = resp.status();

    if status.is_success() {
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
            status: status.as_u16(),
            source,
        })
    } else {
        let text = resp.text().await?;
        Err(Error::from_status(status.as_u16(), text))
    }
}

async fn handle_empty_response(resp: Response) -> Result<(), Error> {
    let status = resp.status();

    if status.is_success() {
        Ok(())
    } else {
        let text = resp.text().await?;
        Err(Error::from_status(status.as_u16(), text))
    }
}
