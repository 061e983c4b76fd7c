//! Error types for routing and view loading.
//!
//! - [`RouteError`] - routing configuration that could not be resolved
//! - [`FetchError`] - fragment retrieval failures
//! - [`MountError`] - failures while materializing a fragment
//! - [`LoadError`] - everything a single view load can fail with
//!
//! None of these ever escape the router: configuration errors fall back to
//! inference, load errors are rendered inline in the mount container.

use thiserror::Error;

/// Routing configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The `data-base` attribute could not be resolved against the location.
    #[error("invalid base '{base}': {reason}")]
    InvalidBase { base: String, reason: String },
    /// The current location is not a parseable URL.
    #[error("invalid location '{0}'")]
    InvalidLocation(String),
}

/// Network/fetch-related errors for fragment requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, offline, ...)
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read response body
    #[error("failed to read response")]
    ReadFailed,
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}

/// Errors raised while replacing the mounted content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// The mount container is not (yet) attached to the document.
    #[error("mount container not found")]
    ContainerMissing,
    /// A DOM operation was rejected.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// A failed view load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to fetch view '{view}': {source}")]
    Fetch { view: String, source: FetchError },
    #[error("failed to mount view '{view}': {source}")]
    Mount { view: String, source: MountError },
}

impl LoadError {
    /// The view whose load failed.
    pub fn view(&self) -> &str {
        match self {
            Self::Fetch { view, .. } | Self::Mount { view, .. } => view,
        }
    }
}
