//! market-scatter: interactive log-log scatter plot core for market aggregates.
//!
//! Points (x = volume, y = close by default) sit on logarithmic axes and are
//! colored by a symmetric-log percentage change. The engine owns scales,
//! zoom/pan, nearest-point hover, point-click dispatch and a retained scene
//! that renders through any [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PlotEngine, PlotEngineConfig, RenderOutcome};
pub use error::{PlotError, PlotResult};
