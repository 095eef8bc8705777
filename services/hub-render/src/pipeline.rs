//! The four-stage render pipeline.
//!
//! 1. Canvas: blank raster plus label font
//! 2. Load: hub records from JSON
//! 3. Render: label and outline per hub
//! 4. Write: atomic PNG

use std::path::PathBuf;

use anyhow::{Context, Result};
use hub_common::load_hubs;
use renderer::{render_hubs, write_png, Canvas, LabelFont, RenderConfig, RenderSummary};
use tracing::info;

pub const DEFAULT_INPUT: &str = "fmi2.json";
pub const DEFAULT_FONT: &str = "/usr/share/fonts/gnu-free/FreeMono.otf";
pub const DEFAULT_OUTPUT: &str = "data/background.png";

/// Everything one pipeline run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub font: PathBuf,
    pub output: PathBuf,
    /// Quality hint for the output image (0-100).
    pub quality: u8,
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            font: PathBuf::from(DEFAULT_FONT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            quality: renderer::DEFAULT_QUALITY,
            render: RenderConfig::default(),
        }
    }
}

/// Run the pipeline once.
///
/// Any error aborts before the output is written, so a failed run leaves
/// the previous output file (if any) untouched.
pub fn run(config: &PipelineConfig) -> Result<RenderSummary> {
    let font = LabelFont::load(&config.font, config.render.font_size)
        .context("Failed to initialize canvas")?;
    let mut canvas = Canvas::new(&config.render, font);

    let hubs = load_hubs(&config.input)
        .with_context(|| format!("Failed to load hubs from {}", config.input.display()))?;

    let summary =
        render_hubs(&mut canvas, &hubs, &config.render).context("Failed to render hubs")?;

    write_png(canvas.image(), &config.output, config.quality)
        .with_context(|| format!("Failed to save {}", config.output.display()))?;

    info!(
        output = %config.output.display(),
        drawn = summary.drawn,
        skipped = summary.skipped,
        "Hub map complete"
    );
    Ok(summary)
}
