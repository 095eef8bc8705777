//! Geometry value types.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A closed coordinate sequence (first point equals last point).
///
/// An empty ring is allowed and represents `EMPTY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRing(pub Vec<Point>);

impl LinearRing {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A polygon with one exterior ring and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: LinearRing,
    pub interiors: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// `POLYGON EMPTY`
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

/// Any geometry that can appear in a WKT string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// `None` for `POINT EMPTY`.
    Point(Option<Point>),
    LineString(Vec<Point>),
    Polygon(Polygon),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<Vec<Point>>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// The OGC type name, e.g. `"Polygon"` or `"MultiPolygon"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Consume the geometry, returning the polygon if it is one.
    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}
