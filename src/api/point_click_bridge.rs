use tracing::debug;

use crate::core::DataPoint;
use crate::error::PlotResult;
use crate::render::Renderer;

use super::PlotEngine;

/// Payload handed to the point-click handler.
#[derive(Debug, Clone, PartialEq)]
pub struct PointClickEvent {
    pub index: usize,
    pub point: DataPoint,
}

/// Host callback invoked when a marker is clicked.
///
/// Runs while the engine is mutably borrowed, so it must not call back into
/// the same engine synchronously.
pub type PointClickHandler = Box<dyn FnMut(&PointClickEvent)>;

impl<R: Renderer> PlotEngine<R> {
    /// Registers the point-click handler, replacing any previous one.
    pub fn set_point_click_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&PointClickEvent) + 'static,
    {
        if self.click_handler.replace(Box::new(handler)).is_some() {
            debug!("point click handler replaced");
        }
    }

    /// Removes the handler; returns whether one was registered.
    pub fn clear_point_click_handler(&mut self) -> bool {
        self.click_handler.take().is_some()
    }

    #[must_use]
    pub fn has_point_click_handler(&self) -> bool {
        self.click_handler.is_some()
    }

    /// Marker drawn under plot-area position `(x, y)`, if any.
    ///
    /// The hovered marker is drawn on top with the larger radius, so it wins
    /// over the nearest one.
    pub fn marker_at(&self, x: f64, y: f64) -> PlotResult<Option<usize>> {
        let markers = &self.config.markers;
        if let Some(hovered) = self.hovered_index() {
            if let Some((mx, my)) = self.marker_position(hovered) {
                if (x - mx).hypot(y - my) <= markers.hover_radius_px && self.has_marker(hovered) {
                    return Ok(Some(hovered));
                }
            }
        }

        let Some((index, distance)) = self.hit_test(x, y)? else {
            return Ok(None);
        };
        let radius = if self.hovered_index() == Some(index) {
            markers.hover_radius_px
        } else {
            markers.radius_px
        };
        if distance <= radius && self.has_marker(index) {
            Ok(Some(index))
        } else {
            Ok(None)
        }
    }

    pub(super) fn dispatch_point_click(
        &mut self,
        x: f64,
        y: f64,
    ) -> PlotResult<Option<PointClickEvent>> {
        if self.spatial_index.is_none() {
            return Ok(None);
        }
        let Some(index) = self.marker_at(x, y)? else {
            return Ok(None);
        };
        let Some(point) = self.dataset.get(index).cloned() else {
            return Ok(None);
        };

        let event = PointClickEvent { index, point };
        if let Some(handler) = self.click_handler.as_mut() {
            debug!(index, name = %event.point.name, "dispatching point click");
            handler(&event);
        }
        Ok(Some(event))
    }

    pub(super) fn has_marker(&self, index: usize) -> bool {
        self.scene.markers().any(|(_, node)| node.index == index)
    }
}
