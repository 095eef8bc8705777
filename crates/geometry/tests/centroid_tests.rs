//! Tests for centroid computation and exterior ring extraction.

use geometry::{
    centroid, exterior_ring_points, parse_wkt_polygon, ExteriorRing, GeometryError, Point,
};
use test_utils::{assert_approx_eq, assert_coords_approx_eq};

fn centroid_of(wkt: &str) -> Point {
    let polygon = parse_wkt_polygon(wkt).unwrap();
    centroid(&polygon).unwrap()
}

// ============================================================================
// Centroid
// ============================================================================

#[test]
fn test_centroid_square() {
    let c = centroid_of("POLYGON((0 0,10 0,10 10,0 10,0 0))");
    assert_coords_approx_eq!((c.x, c.y), (5.0, 5.0), 1e-9);
}

#[test]
fn test_centroid_clockwise_square() {
    let c = centroid_of("POLYGON((0 0,0 10,10 10,10 0,0 0))");
    assert_coords_approx_eq!((c.x, c.y), (5.0, 5.0), 1e-9);
}

#[test]
fn test_centroid_triangle() {
    // Triangle centroid is the vertex mean.
    let c = centroid_of("POLYGON((0 0,6 0,0 9,0 0))");
    assert_coords_approx_eq!((c.x, c.y), (2.0, 3.0), 1e-9);
}

#[test]
fn test_centroid_is_area_weighted_not_vertex_mean() {
    // L-shape: vertex mean is (1.5, 1.5), area-weighted centroid differs.
    let c = centroid_of("POLYGON((0 0,3 0,3 1,1 1,1 3,0 3,0 0))");
    // Two rectangles: 3x1 at (1.5, 0.5) and 1x2 at (0.5, 2.0); total area 5.
    assert_approx_eq!(c.x, (3.0 * 1.5 + 2.0 * 0.5) / 5.0, 1e-9);
    assert_approx_eq!(c.y, (3.0 * 0.5 + 2.0 * 2.0) / 5.0, 1e-9);
}

#[test]
fn test_centroid_with_hole() {
    // 10x10 square minus 2x2 hole at (1..3, 1..3).
    let c = centroid_of("POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,3 1,3 3,1 3,1 1))");
    let expected = (100.0 * 5.0 - 4.0 * 2.0) / 96.0;
    assert_coords_approx_eq!((c.x, c.y), (expected, expected), 1e-9);
}

#[test]
fn test_centroid_hole_winding_does_not_matter() {
    let a = centroid_of("POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,3 1,3 3,1 3,1 1))");
    let b = centroid_of("POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,1 3,3 3,3 1,1 1))");
    assert_coords_approx_eq!((a.x, a.y), (b.x, b.y), 1e-9);
}

#[test]
fn test_centroid_far_from_origin() {
    let c = centroid_of(
        "POLYGON((1000000 2000000,1000010 2000000,1000010 2000010,1000000 2000010,1000000 2000000))",
    );
    assert_coords_approx_eq!((c.x, c.y), (1000005.0, 2000005.0), 1e-6);
}

#[test]
fn test_centroid_zero_area_falls_back_to_edges() {
    // Collapsed ring along the x axis: 0 -> 4 -> 0.
    let c = centroid_of("POLYGON((0 0,4 0,2 0,0 0))");
    assert_coords_approx_eq!((c.x, c.y), (2.0, 0.0), 1e-9);
}

#[test]
fn test_centroid_single_repeated_point_falls_back_to_vertex_mean() {
    let c = centroid_of("POLYGON((3 4,3 4,3 4,3 4))");
    assert_coords_approx_eq!((c.x, c.y), (3.0, 4.0), 1e-9);
}

#[test]
fn test_centroid_empty_polygon() {
    let polygon = parse_wkt_polygon("POLYGON EMPTY").unwrap();
    assert_eq!(centroid(&polygon), None);
}

// ============================================================================
// Exterior ring
// ============================================================================

#[test]
fn test_exterior_ring_points_in_order() {
    let polygon = parse_wkt_polygon("POLYGON((0 0,10 0,10 10,0 10,0 0))").unwrap();
    let points = exterior_ring_points(&polygon).unwrap();
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn test_exterior_ring_ignores_holes() {
    let polygon =
        parse_wkt_polygon("POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,3 1,3 3,1 3,1 1))").unwrap();
    let (xs, ys) = polygon.exterior_xy();
    assert_eq!(xs.len(), 5);
    assert_eq!(ys.len(), 5);
}

/// Ring source that reports mismatched coordinate arrays.
struct LopsidedRing;

impl ExteriorRing for LopsidedRing {
    fn exterior_xy(&self) -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 1.0, 1.0, 0.0], vec![0.0, 0.0, 1.0])
    }
}

#[test]
fn test_exterior_ring_length_mismatch_is_an_error() {
    assert_eq!(
        exterior_ring_points(&LopsidedRing),
        Err(GeometryError::RingLengthMismatch { xs: 4, ys: 3 })
    );
}
