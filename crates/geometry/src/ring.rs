//! Exterior ring extraction.

use crate::error::{GeometryError, GeometryResult};
use crate::types::{Point, Polygon};

/// Anything that can expose its outer boundary as parallel coordinate arrays.
pub trait ExteriorRing {
    /// The x and y ordinates of the exterior ring, in ring order.
    fn exterior_xy(&self) -> (Vec<f64>, Vec<f64>);
}

impl ExteriorRing for Polygon {
    fn exterior_xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.exterior.points().iter().map(|p| (p.x, p.y)).unzip()
    }
}

/// Zip the exterior ring's x and y arrays into ordered points.
///
/// Mismatched array lengths are an error rather than a silent truncation.
pub fn exterior_ring_points<R: ExteriorRing + ?Sized>(shape: &R) -> GeometryResult<Vec<Point>> {
    let (xs, ys) = shape.exterior_xy();
    if xs.len() != ys.len() {
        return Err(GeometryError::RingLengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    Ok(xs.into_iter().zip(ys).map(Point::from).collect())
}
