//! Error type shared by every endpoint.

use serde::Deserialize;

/// Error body the node returns alongside a non-2xx status.
///
/// ```json
/// { "error": 199, "message": "block does not exist" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("node error {code}: {message}")]
pub struct NodeError {
    #[serde(rename = "error")]
    pub code: i64,
    pub message: String,
}

/// Client error type.
///
/// Failures are passed through as the transport raised them; nothing is
/// retried or remapped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Status code if the node answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            #[cfg(feature = "client")]
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parses the node's structured error out of a `Status` body, if it has one.
    pub fn node_error(&self) -> Option<NodeError> {
        match self {
            Error::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Returns `true` for a 404 from the node (unknown block, id or address).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
