use tracing::{debug, trace};

use crate::core::{ContentBox, ZoomTransform};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{GestureKind, InteractionMode, WheelInput};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Replaces the transform. Translation is constrained to the content box;
    /// the scale is taken as given.
    pub fn set_transform(&mut self, transform: ZoomTransform) -> PlotResult<()> {
        let transform = ZoomTransform::new(transform.x, transform.y, transform.k)?;
        self.apply_transform(transform)?;
        Ok(())
    }

    /// Multiplies the scale by `factor` (clamped to the zoom extent), keeping
    /// the plot-area point `anchor` fixed.
    pub fn zoom_by(&mut self, factor: f64, anchor: (f64, f64)) -> PlotResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.0.is_finite() || !anchor.1.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        let k = self.clamp_scale(self.transform.k * factor);
        self.apply_transform(self.transform.zoom_to(k, anchor))?;
        Ok(())
    }

    /// Back to the identity transform, dropping any in-flight gesture.
    pub fn reset_zoom(&mut self) -> PlotResult<()> {
        self.interaction.reset();
        self.apply_transform(ZoomTransform::IDENTITY)?;
        debug!("zoom reset to identity");
        Ok(())
    }

    /// Wheel zoom anchored at surface position `(x, y)`.
    ///
    /// Returns `false` when the event was ignored (outside the plot area or
    /// already at the scale limit).
    pub fn wheel(&mut self, x: f64, y: f64, input: WheelInput) -> PlotResult<bool> {
        let pointer = self.to_plot_coords(x, y);
        if !self.config.size.contains(pointer.0, pointer.1) {
            return Ok(false);
        }
        let exponent = input.zoom_exponent();
        if !exponent.is_finite() {
            return Err(PlotError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }

        let k = self.clamp_scale(self.transform.k * 2f64.powf(exponent));
        let in_wheel_gesture = self.interaction.mode() == InteractionMode::Active(GestureKind::Wheel);
        if !in_wheel_gesture && k == self.transform.k {
            return Ok(false);
        }
        if !in_wheel_gesture {
            debug!(k = self.transform.k, "wheel zoom started");
        }
        self.interaction
            .on_wheel(self.config.zoom.wheel_idle_timeout_ms / 1000.0);
        self.apply_transform(self.transform.zoom_to(k, pointer))
    }

    /// Double-click zoom: doubles the scale at the pointer, or halves it when
    /// `zoom_out` is set.
    pub fn double_click(&mut self, x: f64, y: f64, zoom_out: bool) -> PlotResult<bool> {
        let pointer = self.to_plot_coords(x, y);
        if !self.config.size.contains(pointer.0, pointer.1) {
            return Ok(false);
        }
        let factor = if zoom_out { 0.5 } else { 2.0 };
        let k = self.clamp_scale(self.transform.k * factor);
        self.apply_transform(self.transform.zoom_to(k, pointer))
    }

    pub(super) fn drag_to(&mut self, anchor: (f64, f64), pointer: (f64, f64)) -> PlotResult<bool> {
        self.apply_transform(self.transform.pin(anchor, pointer))
    }

    pub(super) fn to_plot_coords(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.config.margin.left, y - self.config.margin.top)
    }

    pub(super) fn clamp_scale(&self, k: f64) -> f64 {
        k.clamp(self.config.zoom.min_scale, self.config.zoom.max_scale)
    }

    /// Constrains `candidate`, installs it and derives the zoomed scales.
    /// Base scales and the spatial index are never touched.
    pub(super) fn apply_transform(&mut self, candidate: ZoomTransform) -> PlotResult<bool> {
        let bounds = ContentBox::from_size(self.config.size.width, self.config.size.height);
        let constrained = candidate.constrain(bounds, bounds);
        let constrained = ZoomTransform::new(constrained.x, constrained.y, constrained.k)?;
        if constrained == self.transform {
            return Ok(false);
        }

        let visible_scales = self.base_scales.rescaled(constrained)?;
        self.transform = constrained;
        self.visible_scales = visible_scales;
        trace!(
            k = constrained.k,
            x = constrained.x,
            y = constrained.y,
            "zoom transform updated"
        );

        if let Some((mx, my)) = self.interaction.cursor() {
            self.update_hover(mx, my)?;
        }
        Ok(true)
    }
}
