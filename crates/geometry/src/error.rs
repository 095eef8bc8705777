//! Error types for geometry parsing and extraction.

use thiserror::Error;

/// Result type alias using GeometryError.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while reading WKT or walking a parsed geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Structurally invalid WKT text.
    #[error("Invalid WKT format: {0}")]
    InvalidWkt(String),

    /// A coordinate token that is not a finite number.
    #[error("Invalid coordinate value: {0}")]
    InvalidCoordinate(String),

    /// Valid WKT of the wrong geometry type.
    #[error("Expected Polygon, got {0}")]
    NotAPolygon(String),

    /// Exterior ring produced x and y sequences of different lengths.
    #[error("Exterior ring coordinate mismatch: {xs} x values, {ys} y values")]
    RingLengthMismatch { xs: usize, ys: usize },
}
