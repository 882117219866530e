use tracing::{error, trace};

use crate::core::PlotSize;
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{PlotEngine, TooltipBehavior, format_change_percent, format_value};

/// Visible hover overlay for one point.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub index: usize,
    pub title: String,
    pub lines: Vec<String>,
    /// Overlay origin in surface coordinates.
    pub left: f64,
    pub top: f64,
    /// Screen-space distance between pointer and point.
    pub distance_px: f64,
}

/// Overlay origin for a pointer at plot-area position `(mx, my)`, flipped
/// near the right, top and bottom edges so it stays readable.
#[must_use]
pub fn tooltip_placement(
    behavior: &TooltipBehavior,
    size: PlotSize,
    mx: f64,
    my: f64,
) -> (f64, f64) {
    let x_ratio = mx / size.width;
    let y_ratio = my / size.height;
    let left = if x_ratio > behavior.flip_left_ratio {
        mx + behavior.left_offset_px
    } else {
        mx + behavior.right_offset_px
    };
    let top = if y_ratio > behavior.flip_up_ratio {
        my + behavior.near_bottom_offset_px
    } else if y_ratio < behavior.flip_down_ratio {
        my + behavior.near_top_offset_px
    } else {
        my + behavior.default_offset_px
    };
    (left, top)
}

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.tooltip.as_ref().map(|tooltip| tooltip.index)
    }

    /// Nearest point to plot-area position `(x, y)` and its on-screen
    /// distance.
    ///
    /// Fails with [`PlotError::Interaction`] when no dataset has been
    /// rendered yet, since there is nothing to hit-test against.
    pub fn hit_test(&self, x: f64, y: f64) -> PlotResult<Option<(usize, f64)>> {
        let Some(index) = &self.spatial_index else {
            error!(x, y, "hit-test requested before any dataset was rendered");
            return Err(PlotError::Interaction(
                "hit-test requested before any dataset was rendered".to_owned(),
            ));
        };
        let (content_x, content_y) = self.transform.invert((x, y));
        Ok(index
            .nearest_with_distance(content_x, content_y)
            .map(|(nearest, distance)| (nearest, distance * self.transform.k)))
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        if self.tooltip.take().is_some() {
            trace!("tooltip hidden on pointer leave");
        }
    }

    /// Shows or hides the overlay for a pointer at plot-area `(mx, my)`.
    ///
    /// Only points with a drawn marker can be hovered.
    pub(super) fn update_hover(&mut self, mx: f64, my: f64) -> PlotResult<()> {
        if self.spatial_index.is_none() {
            return Ok(());
        }
        let threshold = self.config.tooltip.distance_threshold_px;
        let next = match self.hit_test(mx, my)? {
            Some((index, distance)) if distance < threshold && self.has_marker(index) => {
                self.tooltip_for(index, distance, mx, my)
            }
            _ => None,
        };

        let previous = self.hovered_index();
        let current = next.as_ref().map(|tooltip| tooltip.index);
        if previous != current {
            trace!(?previous, ?current, "hovered point changed");
        }
        self.tooltip = next;
        Ok(())
    }

    fn tooltip_for(&self, index: usize, distance: f64, mx: f64, my: f64) -> Option<TooltipState> {
        let point = self.dataset.get(index)?;
        let behavior = &self.config.tooltip;
        let labels = &behavior.labels;
        let (left, top) = tooltip_placement(behavior, self.config.size, mx, my);
        Some(TooltipState {
            index,
            title: point.name.clone(),
            lines: vec![
                format!("{} : {}", labels.x, format_value(point.x)),
                format!("{} : {}", labels.y, format_value(point.y)),
                format!("{} : {}", labels.z, format_change_percent(point.z)),
            ],
            left,
            top,
            distance_px: distance,
        })
    }
}
