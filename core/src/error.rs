//! Error types for the comment API client.
//!
//! # Design
//! `ClientError` is generic over the transport's error type so a transport
//! failure reaches the caller exactly as the transport produced it. Every
//! other failure is classified from a response the transport did deliver:
//! `Decoding` when the body is not the JSON shape we expected, `Domain` when
//! the status or the record contents are rejected. Domain messages embed the
//! status code and the raw body verbatim.

use thiserror::Error;

/// Errors returned by `CommentApiClient` operations.
#[derive(Debug, Error)]
pub enum ClientError<E> {
    /// The transport could not complete the exchange.
    #[error(transparent)]
    Transport(E),

    /// The response body is not valid JSON of the expected shape.
    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A well-formed response was rejected: non-2xx status or invalid records.
    #[error("{message}")]
    Domain {
        message: String,
        status: u16,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    ///
    /// Unreachable with the current payloads, which hold only string fields;
    /// kept so the `build_*` methods can report encoder failures instead of
    /// panicking.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),
}

impl<E> ClientError<E> {
    pub(crate) fn domain(message: String, status: u16, body: &str) -> Self {
        ClientError::Domain {
            message,
            status,
            body: body.to_string(),
        }
    }

    /// Status code carried by a `Domain` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Domain { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, ClientError::Decoding(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, ClientError::Domain { .. })
    }
}

/// Errors raised while loading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
