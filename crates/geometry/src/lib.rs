//! Planar geometry for hub outlines.
//!
//! Provides just enough geometry to place and draw a hub:
//! - WKT parsing (all OGC simple-feature types, so non-polygons can be reported)
//! - Area-weighted polygon centroid
//! - Exterior ring extraction as ordered points

pub mod centroid;
pub mod error;
pub mod ring;
pub mod types;
pub mod wkt;

pub use centroid::centroid;
pub use error::{GeometryError, GeometryResult};
pub use ring::{exterior_ring_points, ExteriorRing};
pub use types::{Geometry, LinearRing, Point, Polygon};
pub use wkt::{parse_wkt, parse_wkt_polygon};
