//! Transport error types

use thiserror::Error;

/// Transport error with classification. The widget surfaces every failure as
/// the same fixed transcript entry; the classification and message exist for
/// diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Http, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Decode, message)
    }
}

/// Failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection failure or timeout
    Network,
    /// Non-success HTTP status from the server
    Http,
    /// Response body did not match the expected wire shape
    Decode,
}
