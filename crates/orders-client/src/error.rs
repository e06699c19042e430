//! Error types for the orders client.

use crate::types::ErrorPayload;
use thiserror::Error;


/// Client error types.
///
/// HTTP-status failures carry the decoded [`ErrorPayload`] when the server
/// sent one, and the raw response body either way.
#[derive(Debug, Error)]
pub enum Error {
    /// Server rejected the request as invalid (400).
    #[error("Bad request (400): {}", describe(.payload, .body))]
    BadRequest {
        /// Decoded error body, if any.
        payload: Option<ErrorPayload>,
        /// Raw response body.
        body: String,
    },

    /// No resource at the requested path (404).
    #[error("Not found (404): {}", describe(.payload, .body))]
    NotFound {
        /// Decoded error body, if any.
        payload: Option<ErrorPayload>,
        /// Raw response body.
        body: String,
    },

    /// State or version clash signalled by the server (409).
    #[error("Conflict (409): {}", describe(.payload, .body))]
    Conflict {
        /// Decoded error body, if any.
        payload: Option<ErrorPayload>,
        /// Raw response body.
        body: String,
    },

    /// Any other non-2xx response.
    #[error("Request failed ({status}): {}", describe(.payload, .body))]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Decoded error body, if any.
        payload: Option<ErrorPayload>,
        /// Raw response body.
        body: String,
    },

    /// A 2xx body did not match the expected shape.
    #[error("Failed to decode response ({status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Connection-level failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Failure classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::BadRequest`].
    BadRequest,
    /// See [`Error::NotFound`].
    NotFound,
    /// See [`Error::Conflict`].
    Conflict,
    /// See [`Error::RequestFailed`].
    RequestFailed,
    /// See [`Error::Decode`].
    DecodeFailure,
    /// See [`Error::Transport`].
    TransportFailure,
    /// See [`Error::InvalidUrl`].
    InvalidUrl,
}

impl Error {
    /// Classifies a non-2xx response.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let payload = serde_json::from_str::<ErrorPayload>(&body).ok();
        match status {
            400 => Self::BadRequest { payload, body },
            404 => Self::NotFound { payload, body },
            409 => Self::Conflict { payload, body },
            _ => Self::RequestFailed {
                status,
                payload,
                body,
            },
        }
    }

    /// Returns the failure kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::RequestFailed { .. } => ErrorKind::RequestFailed,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::Transport(_) => ErrorKind::TransportFailure,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
        }
    }

    /// Returns the HTTP status of the response that caused the failure.
    ///
    /// `None` only when no response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            Self::RequestFailed { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Returns the structured error body sent by the server, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::BadRequest { payload, .. }
            | Self::NotFound { payload, .. }
            | Self::Conflict { payload, .. }
            | Self::RequestFailed { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }
}

fn describe(payload: &Option<ErrorPayload>, body: &str) -> String {
    match payload {
        Some(payload) => payload.to_string(),
        None if body.is_empty() => "<empty body>".to_string(),
        None => body.to_string(),
    }
}
