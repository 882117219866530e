use tracing::{debug, trace};

use crate::error::PlotResult;
use crate::interaction::ReleaseKind;
use crate::render::Renderer;

use super::{PlotEngine, PointClickEvent};

impl<R: Renderer> PlotEngine<R> {
    /// Pointer motion at surface position `(x, y)`.
    ///
    /// Drives an active drag and refreshes the hover overlay. Leaving the
    /// plot area hides the overlay; an active drag keeps following.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<()> {
        let pointer = self.to_plot_coords(x, y);
        let tolerance = self.config.zoom.click_tolerance_px;
        if let Some(anchor) = self.interaction.on_press_move(pointer.0, pointer.1, tolerance) {
            self.drag_to(anchor, pointer)?;
        }

        if !self.config.size.contains(pointer.0, pointer.1) {
            self.pointer_leave();
            return Ok(());
        }
        self.interaction.on_pointer_move(pointer.0, pointer.1);
        self.update_hover(pointer.0, pointer.1)
    }

    /// Primary button press. Returns `false` outside the plot area.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let pointer = self.to_plot_coords(x, y);
        if !self.config.size.contains(pointer.0, pointer.1) {
            return false;
        }
        let anchor = self.transform.invert(pointer);
        self.interaction.on_press(pointer, anchor);
        trace!(x = pointer.0, y = pointer.1, "pointer pressed");
        true
    }

    /// Primary button release.
    ///
    /// A release without movement is a click: when it lands on a marker the
    /// point-click handler runs and the event is returned. Clicks never zoom.
    pub fn pointer_up(&mut self, _x: f64, _y: f64) -> PlotResult<Option<PointClickEvent>> {
        match self.interaction.on_release() {
            ReleaseKind::Click { x, y } => self.dispatch_point_click(x, y),
            ReleaseKind::DragEnd => {
                debug!(
                    k = self.transform.k,
                    x = self.transform.x,
                    y = self.transform.y,
                    "drag pan ended"
                );
                Ok(None)
            }
            ReleaseKind::Stray => Ok(None),
        }
    }
}
