//! Raster canvas that hub labels and outlines are drawn onto.

use geometry::Point;
use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};

use crate::config::RenderConfig;
use crate::font::LabelFont;

/// Drawing operations the hub renderer needs.
pub trait Surface {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_label(&mut self, x: i32, y: i32, text: &str, color: Rgba<u8>);

    /// Draw an unfilled outline through `points`, closing back to the first point.
    fn draw_outline(&mut self, points: &[Point], color: Rgba<u8>);
}

/// Create a canvas-sized image filled with the background color.
pub fn blank_image(config: &RenderConfig) -> RgbaImage {
    ImageBuffer::from_pixel(config.width, config.height, config.background)
}

/// RGBA raster plus the font used for every label.
///
/// Drawing only ever adds to the image; nothing clears it.
pub struct Canvas {
    image: RgbaImage,
    font: LabelFont,
}

impl Canvas {
    pub fn new(config: &RenderConfig, font: LabelFont) -> Self {
        Self {
            image: blank_image(config),
            font,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

}

/// Clip the segment `a`-`b` to the pixel rectangle `[0, width-1] x [0, height-1]`
/// (Liang-Barsky). Returns `None` when no part of the segment is inside.
///
/// Clipped endpoints are solved on the boundary they cross rather than
/// interpolated, so huge coordinates do not lose the on-canvas part.
/// Segments whose extent is not finite in f64 are dropped.
pub fn clip_segment(a: Point, b: Point, width: u32, height: u32) -> Option<(Point, Point)> {
    if width == 0 || height == 0 {
        return None;
    }
    let (max_x, max_y) = (f64::from(width - 1), f64::from(height - 1));
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    let edges = [
        (-dx, a.x, Edge::X(0.0)),
        (dx, max_x - a.x, Edge::X(max_x)),
        (-dy, a.y, Edge::Y(0.0)),
        (dy, max_y - a.y, Edge::Y(max_y)),
    ];
    let mut enter = (0.0_f64, None);
    let mut leave = (1.0_f64, None);
    for (p, q, edge) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 && t > enter.0 {
            enter = (t, Some(edge));
        } else if p > 0.0 && t < leave.0 {
            leave = (t, Some(edge));
        }
    }
    if enter.0 > leave.0 {
        return None;
    }

    let on_edge = |edge: Option<Edge>, fallback: Point| match edge {
        None => fallback,
        Some(Edge::X(x)) => Point::new(x, (a.y + (x - a.x) * (dy / dx)).clamp(0.0, max_y)),
        Some(Edge::Y(y)) => Point::new((a.x + (y - a.y) * (dx / dy)).clamp(0.0, max_x), y),
    };
    Some((on_edge(enter.1, a), on_edge(leave.1, b)))
}

/// Canvas boundary a segment crosses: a vertical line `x = c` or a horizontal one `y = c`.
#[derive(Clone, Copy)]
enum Edge {
    X(f64),
    Y(f64),
}

impl Canvas {
    fn draw_segment(&mut self, a: Point, b: Point, color: Rgba<u8>) {
        let (width, height) = self.image.dimensions();
        if let Some((start, end)) = clip_segment(a, b, width, height) {
            draw_line_segment_mut(
                &mut self.image,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
        }
    }

    /// Whether a label anchored at `(x, y)` can touch the image at all.
    ///
    /// Glyphs are bounded by one font size per character plus one of slack.
    fn label_may_be_visible(&self, x: i32, y: i32, text: &str) -> bool {
        let (width, height) = self.image.dimensions();
        let size = f64::from(self.font.size()).ceil().max(1.0) as i64;
        let extent = (text.chars().count() as i64 + 1) * size;
        let (x, y) = (i64::from(x), i64::from(y));

        x < i64::from(width) && y < i64::from(height) && x + extent >= 0 && y + extent >= 0
    }
}

impl Surface for Canvas {
    fn draw_label(&mut self, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        if !self.label_may_be_visible(x, y, text) {
            return;
        }
        draw_text_mut(
            &mut self.image,
            color,
            x,
            y,
            self.font.scale(),
            self.font.font(),
            text,
        );
    }

    fn draw_outline(&mut self, points: &[Point], color: Rgba<u8>) {
        match points {
            [] => {}
            [only] => self.draw_segment(*only, *only, color),
            [first, .., last] => {
                for edge in points.windows(2) {
                    self.draw_segment(edge[0], edge[1], color);
                }
                if first != last {
                    self.draw_segment(*last, *first, color);
                }
            }
        }
    }
}
