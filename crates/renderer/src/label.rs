//! Label placement around a hub centroid.
//!
//! Placement is a fixed-width heuristic, not real text metrics: each
//! character is assumed to be `font_size * 1.125 / 2` wide and the label is
//! lifted by `font_size * 1.25 / 2`.

use geometry::Point;

/// Assumed advance per character, as a fraction of font size.
pub const CHAR_WIDTH_FACTOR: f64 = 1.125 / 2.0;

/// Upward shift of the label's top edge, as a fraction of font size.
pub const VERTICAL_OFFSET_FACTOR: f64 = 1.25 / 2.0;

/// Top-left pixel for a label meant to sit centered on `center`.
pub fn label_anchor(center: Point, text: &str, font_size: f32) -> (i32, i32) {
    let size = font_size as f64;
    let half_chars = text.chars().count() as f64 / 2.0;

    let x = center.x - half_chars * (size * CHAR_WIDTH_FACTOR);
    let y = center.y - size * VERTICAL_OFFSET_FACTOR;

    (x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_at_default_size() {
        // 3 chars at size 32: 1.5 * 18 = 27 left, 20 up.
        assert_eq!(label_anchor(Point::new(5.0, 5.0), "HUB", 32.0), (-22, -15));
        assert_eq!(label_anchor(Point::new(250.0, 250.0), "HUB", 32.0), (223, 230));
    }

    #[test]
    fn test_anchor_empty_name() {
        assert_eq!(label_anchor(Point::new(100.0, 100.0), "", 32.0), (100, 80));
    }

    #[test]
    fn test_anchor_counts_characters_not_bytes() {
        // "Ümü" is 3 chars but 5 bytes.
        assert_eq!(
            label_anchor(Point::new(100.0, 100.0), "Ümü", 32.0),
            label_anchor(Point::new(100.0, 100.0), "ABC", 32.0)
        );
    }

    #[test]
    fn test_anchor_rounds_to_nearest_pixel() {
        // 1 char at size 10: x offset 2.8125, y offset 6.25.
        assert_eq!(label_anchor(Point::new(10.0, 10.0), "A", 10.0), (7, 4));
    }
}
