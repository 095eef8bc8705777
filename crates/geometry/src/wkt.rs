//! Well-Known Text reader.
//!
//! Accepts the OGC simple-feature types in any letter case:
//! - `POINT`, `LINESTRING`, `POLYGON`
//! - `MULTIPOINT` (with or without per-point parentheses)
//! - `MULTILINESTRING`, `MULTIPOLYGON`, `GEOMETRYCOLLECTION`
//!
//! Optional `Z`, `M` and `ZM` tags are accepted; extra ordinates are read and
//! dropped since rendering is planar. Every type supports `EMPTY`.

use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::types::{Geometry, LinearRing, Point, Polygon};

/// Minimum points in a non-empty ring, closing point included.
const MIN_RING_POINTS: usize = 4;

/// Parse any WKT geometry.
pub fn parse_wkt(text: &str) -> GeometryResult<Geometry> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let geometry = parser.parse_geometry()?;

    if let Some(token) = parser.peek() {
        return Err(GeometryError::InvalidWkt(format!(
            "Unexpected trailing input starting at {}",
            token
        )));
    }

    Ok(geometry)
}

/// Parse a WKT string that must be a `POLYGON`.
///
/// Well-formed WKT of any other type yields `GeometryError::NotAPolygon`
/// carrying the actual type name.
pub fn parse_wkt_polygon(text: &str) -> GeometryResult<Polygon> {
    let geometry = parse_wkt(text)?;
    let geometry_type = geometry.geometry_type();
    geometry
        .into_polygon()
        .ok_or_else(|| GeometryError::NotAPolygon(geometry_type.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Number(String),
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "'{}'", w),
            Token::Number(n) => write!(f, "'{}'", n),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

fn describe(token: Option<&Token>) -> String {
    match token {
        Some(t) => t.to_string(),
        None => "end of input".to_string(),
    }
}

fn tokenize(text: &str) -> GeometryResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Word(text[start..end].to_ascii_uppercase()));
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Number(text[start..end].to_string()));
            }
            other => {
                return Err(GeometryError::InvalidWkt(format!(
                    "Unexpected character '{}' at offset {}",
                    other, start
                )));
            }
        }
    }

    Ok(tokens)
}

/// Deepest `GEOMETRYCOLLECTION` nesting accepted before the text is rejected.
pub const MAX_NESTING: usize = 32;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Enclosing `GEOMETRYCOLLECTION`s at the current position.
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> GeometryResult<()> {
        match self.next() {
            Some(ref token) if *token == expected => Ok(()),
            other => Err(GeometryError::InvalidWkt(format!(
                "Expected {}, found {}",
                expected,
                describe(other.as_ref())
            ))),
        }
    }

    /// Consume `EMPTY` if it is next.
    fn take_empty(&mut self) -> bool {
        if matches!(self.peek(), Some(Token::Word(w)) if w == "EMPTY") {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Ordinates per coordinate declared by a `Z`/`M`/`ZM` tag, if any.
    fn parse_dimension(&mut self) -> Option<usize> {
        let ordinates = match self.peek() {
            Some(Token::Word(w)) if w == "Z" || w == "M" => 3,
            Some(Token::Word(w)) if w == "ZM" => 4,
            _ => return None,
        };
        self.pos += 1;
        Some(ordinates)
    }

    fn parse_geometry(&mut self) -> GeometryResult<Geometry> {
        let keyword = match self.next() {
            Some(Token::Word(w)) => w,
            other => {
                return Err(GeometryError::InvalidWkt(format!(
                    "Expected geometry type, found {}",
                    describe(other.as_ref())
                )));
            }
        };
        let dims = self.parse_dimension();

        match keyword.as_str() {
            "POINT" => {
                if self.take_empty() {
                    return Ok(Geometry::Point(None));
                }
                self.expect(Token::LParen)?;
                let point = self.parse_coord(dims)?;
                self.expect(Token::RParen)?;
                Ok(Geometry::Point(Some(point)))
            }
            "LINESTRING" => Ok(Geometry::LineString(self.parse_line_string(dims)?)),
            "POLYGON" => Ok(Geometry::Polygon(self.parse_polygon(dims)?)),
            "MULTIPOINT" => Ok(Geometry::MultiPoint(
                self.parse_list(|p| p.parse_multipoint_member(dims))?,
            )),
            "MULTILINESTRING" => Ok(Geometry::MultiLineString(
                self.parse_list(|p| p.parse_line_string(dims))?,
            )),
            "MULTIPOLYGON" => Ok(Geometry::MultiPolygon(
                self.parse_list(|p| p.parse_polygon(dims))?,
            )),
            "GEOMETRYCOLLECTION" => {
                if self.depth >= MAX_NESTING {
                    return Err(GeometryError::InvalidWkt(format!(
                        "GeometryCollection nested deeper than {}",
                        MAX_NESTING
                    )));
                }
                self.depth += 1;
                let members = self.parse_list(|p| p.parse_geometry());
                self.depth -= 1;
                Ok(Geometry::GeometryCollection(members?))
            }
            other => Err(GeometryError::InvalidWkt(format!(
                "Unknown geometry type '{}'",
                other
            ))),
        }
    }

    /// Parse `EMPTY` or a parenthesized, comma-separated list of items.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> GeometryResult<T>,
    ) -> GeometryResult<Vec<T>> {
        if self.take_empty() {
            return Ok(Vec::new());
        }

        self.expect(Token::LParen)?;
        let mut items = Vec::new();
        loop {
            items.push(item(self)?);
            match self.next() {
                Some(Token::Comma) => continue,
                Some(Token::RParen) => break,
                other => {
                    return Err(GeometryError::InvalidWkt(format!(
                        "Expected ',' or ')', found {}",
                        describe(other.as_ref())
                    )));
                }
            }
        }
        Ok(items)
    }

    fn parse_coord(&mut self, dims: Option<usize>) -> GeometryResult<Point> {
        let mut ordinates = Vec::with_capacity(4);
        while let Some(Token::Number(n)) = self.peek() {
            ordinates.push(n.clone());
            self.pos += 1;
        }

        let valid_count = match dims {
            Some(n) => ordinates.len() == n,
            None => (2..=4).contains(&ordinates.len()),
        };
        if !valid_count {
            return Err(GeometryError::InvalidWkt(format!(
                "Expected {} ordinates, got {}",
                dims.map_or_else(|| "2 to 4".to_string(), |n| n.to_string()),
                ordinates.len()
            )));
        }

        let x = parse_ordinate(&ordinates[0])?;
        let y = parse_ordinate(&ordinates[1])?;
        Ok(Point::new(x, y))
    }

    fn parse_coord_seq(&mut self, dims: Option<usize>) -> GeometryResult<Vec<Point>> {
        self.parse_list(|p| p.parse_coord(dims))
    }

    fn parse_multipoint_member(&mut self, dims: Option<usize>) -> GeometryResult<Point> {
        if self.peek() == Some(&Token::LParen) {
            self.pos += 1;
            let point = self.parse_coord(dims)?;
            self.expect(Token::RParen)?;
            Ok(point)
        } else {
            self.parse_coord(dims)
        }
    }

    fn parse_line_string(&mut self, dims: Option<usize>) -> GeometryResult<Vec<Point>> {
        let points = self.parse_coord_seq(dims)?;
        if points.len() == 1 {
            return Err(GeometryError::InvalidWkt(
                "LineString must have 0 or at least 2 points".to_string(),
            ));
        }
        Ok(points)
    }

    fn parse_ring(&mut self, dims: Option<usize>) -> GeometryResult<LinearRing> {
        let points = self.parse_coord_seq(dims)?;
        if points.is_empty() {
            return Ok(LinearRing::default());
        }

        if points.len() < MIN_RING_POINTS {
            return Err(GeometryError::InvalidWkt(format!(
                "Ring must have at least {} points (including closing point), got {}",
                MIN_RING_POINTS,
                points.len()
            )));
        }
        if points.first() != points.last() {
            return Err(GeometryError::InvalidWkt(
                "Ring is not closed (first and last points differ)".to_string(),
            ));
        }

        Ok(LinearRing(points))
    }

    fn parse_polygon(&mut self, dims: Option<usize>) -> GeometryResult<Polygon> {
        let mut rings = self.parse_list(|p| p.parse_ring(dims))?.into_iter();
        let exterior = match rings.next() {
            Some(ring) => ring,
            None => return Ok(Polygon::default()),
        };
        let interiors: Vec<LinearRing> = rings.collect();

        if exterior.is_empty() && interiors.iter().any(|r| !r.is_empty()) {
            return Err(GeometryError::InvalidWkt(
                "Polygon has holes but an empty shell".to_string(),
            ));
        }

        Ok(Polygon::new(exterior, interiors))
    }
}

fn parse_ordinate(text: &str) -> GeometryResult<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(GeometryError::InvalidCoordinate(text.to_string())),
    }
}
