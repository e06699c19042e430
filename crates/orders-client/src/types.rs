//! Request and response types for the Orders API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};


/// Order lifecycle status as reported by the server.
///
/// Transitions are owned by the server; the client only echoes what it
/// receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Freshly created order.
    New,
    /// Order is being worked on.
    Processing,
    /// Order has been fulfilled.
    Completed,
    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the wire representation, usable as a `list_orders` filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Orders
// ============================================================================

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stock keeping unit identifier.
    pub sku: String,
    /// Ordered quantity.
    pub qty: u32,
    /// Price per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a line item.
    #[must_use]
    pub fn new(sku: impl Into<String>, qty: u32, unit_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }
}

/// An order as returned by the server.
///
/// `id`, `customerName`, `status` and `totalAmount` are required when
/// decoding; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier.
    pub id: i64,
    /// Customer name.
    pub customer_name: String,
    /// Current status.
    pub status: OrderStatus,
    /// Order total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Line items, absent on partial views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Customer name.
    pub customer_name: String,
    /// Line items. The server rejects an empty list.
    pub items: Vec<LineItem>,
}

/// Full replacement body of `PUT /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReplacement {
    /// Customer name.
    pub customer_name: String,
    /// Requested status.
    pub status: OrderStatus,
    /// Replacement line items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
}

/// Partial body of `PATCH /orders/{id}`. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    /// New customer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// New line items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
}

impl OrderPatch {
    /// A patch that only changes the status.
    #[must_use]
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Query parameters of `GET /orders`.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct ListOrdersQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
}

// ============================================================================
// Errors
// ============================================================================

/// Structured error body returned by the server on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable code, e.g. `NOT_FOUND`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
