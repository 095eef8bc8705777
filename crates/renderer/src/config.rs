//! Canvas and drawing configuration.

use image::Rgba;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default label font size.
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

/// Opaque mid-gray.
pub const BACKGROUND: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const LABEL_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Configuration for hub rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Fill color of a fresh canvas
    pub background: Rgba<u8>,
    /// Font size for hub labels; also drives label placement
    pub font_size: f32,
    pub label_color: Rgba<u8>,
    pub outline_color: Rgba<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: BACKGROUND,
            font_size: DEFAULT_FONT_SIZE,
            label_color: LABEL_COLOR,
            outline_color: OUTLINE_COLOR,
        }
    }
}
