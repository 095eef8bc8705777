//! Error types for rendering and image output.

use std::path::PathBuf;

use geometry::GeometryError;
use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Fatal rendering errors. Per-record skips are not errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font file {0} is not a usable TrueType/OpenType font")]
    FontParse(PathBuf),

    #[error("Invalid geometry for hub '{hub}': {source}")]
    Geometry {
        hub: String,
        #[source]
        source: GeometryError,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to write image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
