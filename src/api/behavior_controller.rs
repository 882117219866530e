use tracing::debug;

use crate::core::{InvalidPointPolicy, SpatialIndex, project_points};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::validation::{
    validate_axis_style, validate_marker_style, validate_path_style, validate_tooltip_behavior,
    validate_zoom_behavior,
};
use super::{
    AxisStyle, MarkerStyle, PathStyle, PlotEngine, PlotScales, ScaleDomainPolicy, TooltipBehavior,
    ZoomBehavior,
};

impl<R: Renderer> PlotEngine<R> {
    /// Replaces zoom limits; a current scale outside the new extent is
    /// clamped around the plot center.
    pub fn set_zoom_behavior(&mut self, behavior: ZoomBehavior) -> PlotResult<()> {
        let behavior = validate_zoom_behavior(behavior)?;
        self.config.zoom = behavior;
        let k = self.clamp_scale(self.transform.k);
        if k != self.transform.k {
            let center = (self.config.size.width / 2.0, self.config.size.height / 2.0);
            self.apply_transform(self.transform.zoom_to(k, center))?;
        }
        Ok(())
    }

    pub fn set_tooltip_behavior(&mut self, behavior: TooltipBehavior) -> PlotResult<()> {
        validate_tooltip_behavior(&behavior)?;
        self.config.tooltip = behavior;
        self.tooltip = None;
        Ok(())
    }

    pub fn set_marker_style(&mut self, style: MarkerStyle) -> PlotResult<()> {
        self.config.markers = validate_marker_style(style)?;
        Ok(())
    }

    pub fn set_path_style(&mut self, style: PathStyle) -> PlotResult<()> {
        self.config.path = validate_path_style(style)?;
        Ok(())
    }

    pub fn set_axis_style(&mut self, style: AxisStyle) -> PlotResult<()> {
        validate_axis_style(&style)?;
        self.config.axes = style;
        Ok(())
    }

    /// Switches the domain policy and rebuilds the scales for the current
    /// dataset (projection and spatial index included).
    pub fn set_scale_domain_policy(&mut self, policy: ScaleDomainPolicy) -> PlotResult<()> {
        if policy == self.config.scale_domain_policy {
            return Ok(());
        }
        let base_scales = PlotScales::build(&self.dataset, self.config.size, policy)?;
        let base_projection = project_points(self.dataset.points(), base_scales.x, base_scales.y)?;
        self.visible_scales = base_scales.rescaled(self.transform)?;
        self.base_scales = base_scales;
        if self.spatial_index.is_some() {
            self.spatial_index = Some(SpatialIndex::build(&base_projection));
        }
        self.base_projection = base_projection;
        self.config.scale_domain_policy = policy;
        self.tooltip = None;
        debug!(?policy, "scale domain policy changed");
        Ok(())
    }

    /// Applies to datasets rendered after the call.
    pub fn set_invalid_point_policy(&mut self, policy: InvalidPointPolicy) {
        self.config.invalid_point_policy = policy;
    }
}
