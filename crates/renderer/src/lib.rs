//! Raster rendering of hub outlines and labels.
//!
//! - Canvas setup and the `Surface` drawing seam
//! - Centroid-anchored labels
//! - Exterior-ring outlines
//! - Atomic PNG output

pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod hub;
pub mod label;
pub mod png;

pub use canvas::{blank_image, Canvas, Surface};
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use font::LabelFont;
pub use hub::{draw_hub_shape, render_hub, render_hubs, RenderOutcome, RenderSummary, SkipReason};
pub use png::{encode_png, write_png, DEFAULT_QUALITY};
