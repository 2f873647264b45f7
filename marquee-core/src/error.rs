//! Error types for Marquee.
//!
//! [`UpstreamError`] covers a single failed call to the metadata API.
//! [`MovieError`] is what endpoint operations return; the HTTP layer maps
//! client errors to 400 and everything else to a generic 500.

use thiserror::Error;

/// Result type alias using `MovieError`.
pub type Result<T> = std::result::Result<T, MovieError>;

/// Failure of one upstream GET request.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Upstream request to {path} failed: {reason}")]
    Transport {
        /// Upstream path, without query or key
        path: String,
        /// Transport error text
        reason: String,
    },

    /// The upstream answered with a non-2xx status.
    #[error("Upstream returned HTTP {status} for {path}")]
    Status {
        /// Upstream path, without query or key
        path: String,
        /// HTTP status code
        status: u16,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to decode upstream response from {path}: {reason}")]
    Decode {
        /// Upstream path, without query or key
        path: String,
        /// Decoder error text
        reason: String,
    },
}

impl UpstreamError {
    /// Path of the upstream request that failed.
    pub fn path(&self) -> &str {
        match self {
            UpstreamError::Transport { path, .. }
            | UpstreamError::Status { path, .. }
            | UpstreamError::Decode { path, .. } => path,
        }
    }
}

/// Main error type for endpoint operations.
#[derive(Debug, Error)]
pub enum MovieError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CLIENT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A required request parameter was missing or blank.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A request parameter was present but unusable.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as the client sent it
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A primary upstream call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MovieError {
    /// Returns true if the caller sent a bad request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MovieError::MissingParameter(_) | MovieError::InvalidParameter { .. }
        )
    }

    /// Returns true if the error came from the upstream API.
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, MovieError::Upstream(_))
    }
}
