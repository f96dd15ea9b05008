//! Errors raised while fetching or decoding metrics.

use thiserror::Error;

/// Failure of a single metrics fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint {endpoint}: {message}")]
    Endpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// Connecting, sending, or reading the response failed.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Underlying client error.
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} responded with HTTP {status}")]
    Status {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Status code received.
        status: u16,
    },

    /// The body is not JSON, or not a JSON array.
    #[error("response body is not a metrics array: {message}")]
    Decode {
        /// Parser or shape error description.
        message: String,
    },

    /// An entry of the array does not match the record schema.
    #[error("invalid metric record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the entry in the array.
        index: usize,
        /// Why the entry was rejected.
        reason: String,
    },
}

impl FetchError {
    /// Returns `true` for failures caused by the network rather than the payload.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}
