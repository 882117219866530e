use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Advances animations and gesture timers by one frame-clock step.
    ///
    /// Returns `true` while something is still moving, so the host knows to
    /// keep requesting frames.
    pub fn tick(&mut self, delta_seconds: f64) -> PlotResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(PlotError::InvalidData(
                "tick delta must be finite and >= 0".to_owned(),
            ));
        }

        self.scene.advance(delta_seconds);
        if self.interaction.step_wheel_idle(delta_seconds) {
            debug!(k = self.transform.k, "wheel zoom ended");
        }
        Ok(self.is_animating())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scene.is_animating() || self.interaction.is_active()
    }
}
