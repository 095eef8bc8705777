//! Area-weighted polygon centroid.
//!
//! Holes subtract their area from the shell regardless of ring winding.
//! A polygon with zero area degrades the same way JTS/GEOS do: first to
//! the length-weighted centroid of its edges, then to the mean of its
//! vertices.

use crate::types::{LinearRing, Point, Polygon};

/// Compute the centroid of a polygon, or `None` for `POLYGON EMPTY`.
pub fn centroid(polygon: &Polygon) -> Option<Point> {
    let base = *polygon.exterior.points().first()?;

    let mut weight_sum = 0.0;
    let mut cx_sum = 0.0;
    let mut cy_sum = 0.0;

    let rings = std::iter::once((&polygon.exterior, 1.0))
        .chain(polygon.interiors.iter().map(|ring| (ring, -1.0)));
    for (ring, sign) in rings {
        let (area, cx, cy) = ring_moments(ring, base);
        if area == 0.0 {
            continue;
        }
        let weight = sign * area.abs();
        weight_sum += weight;
        cx_sum += weight * cx;
        cy_sum += weight * cy;
    }

    if weight_sum.abs() > f64::EPSILON {
        return Some(Point::new(
            base.x + cx_sum / weight_sum,
            base.y + cy_sum / weight_sum,
        ));
    }

    line_centroid(polygon).or_else(|| vertex_mean(&polygon.exterior))
}

/// Signed area and centroid of one ring, with coordinates relative to `base`.
fn ring_moments(ring: &LinearRing, base: Point) -> (f64, f64, f64) {
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for edge in ring.points().windows(2) {
        let (x0, y0) = (edge[0].x - base.x, edge[0].y - base.y);
        let (x1, y1) = (edge[1].x - base.x, edge[1].y - base.y);
        let cross = x0 * y1 - x1 * y0;
        twice_area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }

    if twice_area == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let area = twice_area / 2.0;
    (area, cx / (3.0 * twice_area), cy / (3.0 * twice_area))
}

fn line_centroid(polygon: &Polygon) -> Option<Point> {
    let mut length_sum = 0.0;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;

    let rings = std::iter::once(&polygon.exterior).chain(polygon.interiors.iter());
    for ring in rings {
        for edge in ring.points().windows(2) {
            let length = (edge[1].x - edge[0].x).hypot(edge[1].y - edge[0].y);
            length_sum += length;
            x_sum += length * (edge[0].x + edge[1].x) / 2.0;
            y_sum += length * (edge[0].y + edge[1].y) / 2.0;
        }
    }

    if length_sum > 0.0 {
        Some(Point::new(x_sum / length_sum, y_sum / length_sum))
    } else {
        None
    }
}

fn vertex_mean(ring: &LinearRing) -> Option<Point> {
    let points = ring.points();
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}
