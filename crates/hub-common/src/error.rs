//! Error types for loading hub records.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using HubError.
pub type HubResult<T> = Result<T, HubError>;

/// Errors raised while reading the hub list.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Failed to read hub file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hub JSON: {0}")]
    Json(#[from] serde_json::Error),
}
