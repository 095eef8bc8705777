//! Common test fixtures for hub-map tests.

/// Hub list JSON documents.
pub mod hubs {
    /// One 10x10 square hub at the origin.
    pub const SQUARE_HUB: &str =
        r#"[{"name":"HUB","polygon":"POLYGON((0 0,10 0,10 10,0 10,0 0))"}]"#;

    /// One hub whose geometry is a point.
    pub const POINT_HUB: &str = r#"[{"name":"BAD","polygon":"POINT(5 5)"}]"#;

    /// No hubs.
    pub const EMPTY: &str = "[]";

    /// Two drawable hubs around one non-polygon.
    pub const MIXED: &str = r#"[
        {"name": "MI", "polygon": "POLYGON((100 100, 200 100, 200 180, 100 180, 100 100))"},
        {"name": "BAD", "polygon": "MULTIPOLYGON(((0 0, 5 0, 5 5, 0 0)))", "level": 2},
        {"name": "MW", "polygon": "POLYGON((250 300, 400 300, 325 450, 250 300))"}
    ]"#;

    /// A hub whose WKT is structurally broken.
    pub const BROKEN_WKT: &str = r#"[{"name":"BROKEN","polygon":"POLYGON((0 0,10 0,10 10"}]"#;

    /// Not JSON at all.
    pub const MALFORMED: &str = r#"[{"name": "HUB", "polygon": "POLYGON((0 0,1 0,1 1,0 0))""#;
}

/// WKT strings for common shapes.
pub mod wkt {
    pub const SQUARE: &str = "POLYGON((0 0,10 0,10 10,0 10,0 0))";

    /// 100x100 square centered on (250, 250).
    pub const CENTER_SQUARE: &str = "POLYGON((200 200,300 200,300 300,200 300,200 200))";

    pub const SQUARE_WITH_HOLE: &str =
        "POLYGON((0 0,10 0,10 10,0 10,0 0),(1 1,3 1,3 3,1 3,1 1))";

    pub const POINT: &str = "POINT(5 5)";

    pub const LINESTRING: &str = "LINESTRING(0 0,10 10)";

    pub const MULTIPOLYGON: &str = "MULTIPOLYGON(((0 0,10 0,10 10,0 0)))";
}
