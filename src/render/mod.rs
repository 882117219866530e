pub mod animation;
mod frame;
mod null_renderer;
mod primitives;
mod scene;

pub use animation::{Transition, ease_cubic_in_out};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use scene::{MarkerJoin, MarkerNode, PathNode, Scene};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend (the plot's mount point).
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scales, zoom and hit-testing.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
