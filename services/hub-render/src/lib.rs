//! Hub map rendering service.
//!
//! Exposes the load -> render -> write pipeline so it can be driven by the
//! `hub-render` binary and by integration tests.

pub mod pipeline;

pub use pipeline::{run, PipelineConfig};
