use crate::core::{
    Dataset, Margin, PlotSize, ProjectedPoint, SpatialIndex, Viewport, ZoomTransform,
};
use crate::error::PlotResult;
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::{Renderer, Scene};

use super::{PlotEngineConfig, PlotScales, PointClickHandler, TooltipState};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns one plot: its dataset, base and zoomed scales, the
/// spatial index used for hover, the zoom transform, the retained marker
/// scene and the renderer. Hosts feed it pointer/wheel events and frame-clock
/// ticks and call [`PlotEngine::render`] whenever they repaint.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotEngineConfig,
    pub(super) dataset: Dataset,
    pub(super) dataset_generation: u64,
    pub(super) base_scales: PlotScales,
    pub(super) visible_scales: PlotScales,
    pub(super) base_projection: Vec<ProjectedPoint>,
    /// `None` until the first dataset has been rendered.
    pub(super) spatial_index: Option<SpatialIndex>,
    pub(super) transform: ZoomTransform,
    pub(super) interaction: InteractionState,
    pub(super) scene: Scene,
    pub(super) tooltip: Option<TooltipState>,
    pub(super) click_handler: Option<PointClickHandler>,
}

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn config(&self) -> &PlotEngineConfig {
        &self.config
    }

    /// Plotting area size (margins excluded).
    #[must_use]
    pub fn size(&self) -> PlotSize {
        self.config.size
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.config.margin
    }

    /// Full surface size, margins included.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.size.surface_viewport(self.config.margin)
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Scales derived from the dataset, unaffected by zoom.
    #[must_use]
    pub fn base_scales(&self) -> PlotScales {
        self.base_scales
    }

    /// Scales seen through the current zoom transform.
    #[must_use]
    pub fn visible_scales(&self) -> PlotScales {
        self.visible_scales
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Current on-screen position (plot-area coordinates) of a point.
    #[must_use]
    pub fn marker_position(&self, index: usize) -> Option<(f64, f64)> {
        self.base_projection
            .get(index)
            .map(|point| self.transform.apply((point.x, point.y)))
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
