//! Hub map renderer.
//!
//! Reads hub outlines from a JSON file and draws each polygon with its name
//! onto a gray canvas, saved as PNG. With no arguments it reads `fmi2.json`
//! and writes `data/background.png`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hub_render::pipeline::{self, PipelineConfig};
use renderer::RenderConfig;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "hub-render")]
#[command(about = "Render hub outlines and labels to a PNG")]
struct Args {
    /// JSON array of {"name", "polygon"} hub records
    #[arg(short, long, env = "HUB_INPUT", default_value = pipeline::DEFAULT_INPUT)]
    input: PathBuf,

    /// Font file used for hub labels
    #[arg(long, env = "HUB_FONT", default_value = pipeline::DEFAULT_FONT)]
    font: PathBuf,

    /// Output PNG path (directory must exist)
    #[arg(short, long, env = "HUB_OUTPUT", default_value = pipeline::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = renderer::config::DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = renderer::config::DEFAULT_HEIGHT)]
    height: u32,

    /// Label font size
    #[arg(long, default_value_t = renderer::config::DEFAULT_FONT_SIZE)]
    font_size: f32,

    /// Output quality hint (0-100); affects compression only
    #[arg(long, default_value_t = renderer::DEFAULT_QUALITY)]
    quality: u8,

    /// Log level
    #[arg(long, env = "HUB_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            font: self.font.clone(),
            output: self.output.clone(),
            quality: self.quality,
            render: RenderConfig {
                width: self.width,
                height: self.height,
                font_size: self.font_size,
                ..RenderConfig::default()
            },
        }
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    info!(input = %args.input.display(), output = %args.output.display(), "Starting hub renderer");

    let config = args.pipeline_config();
    if let Err(e) = pipeline::run(&config) {
        error!("Hub rendering failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
