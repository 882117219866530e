use tracing::{debug, warn};

use crate::core::{DataPoint, Dataset, LoadResult, SpatialIndex, project_points};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{PlotEngine, PlotScales};

const NO_DATA_MESSAGE: &str = "no data points to plot";

/// What a render call ended up drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn { points: usize },
    /// Nothing to plot; the frame still carries axes.
    Empty { message: String },
}

impl RenderOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Plots one marker per point, keyed by point identity.
    ///
    /// Re-rendering the same dataset leaves existing markers (and their
    /// fade-in state) in place; a different dataset replaces them.
    pub fn render_points(&mut self, points: Vec<DataPoint>) -> PlotResult<RenderOutcome> {
        self.install_dataset(points)?;
        if self.dataset.is_empty() {
            return Ok(self.clear_to_empty(NO_DATA_MESSAGE.to_owned()));
        }
        self.draw_markers();
        Ok(RenderOutcome::Drawn {
            points: self.dataset.len(),
        })
    }

    /// Draws the connecting spline through the points in dataset order,
    /// restarting the draw-in animation when the dataset changed.
    ///
    /// A different dataset drops every marker of the previous one; markers
    /// of the same dataset stay.
    pub fn render_path(&mut self, points: Vec<DataPoint>) -> PlotResult<RenderOutcome> {
        let changed = self.install_dataset(points)?;
        if self.dataset.is_empty() {
            return Ok(self.clear_to_empty(NO_DATA_MESSAGE.to_owned()));
        }
        if changed {
            let dropped = self.scene.clear_markers();
            if dropped > 0 {
                debug!(dropped, "markers of previous dataset removed");
            }
        }
        self.draw_path();
        Ok(RenderOutcome::Drawn {
            points: self.dataset.len(),
        })
    }

    /// Renders a data-loader result: markers plus path on success, an
    /// axes-only plot when the load failed.
    pub fn render_load_result(&mut self, result: LoadResult) -> PlotResult<RenderOutcome> {
        match result {
            LoadResult::Failed { message } => {
                warn!(%message, "data load failed; plotting empty dataset");
                self.install_dataset(Vec::new())?;
                Ok(self.clear_to_empty(message))
            }
            LoadResult::Loaded(points) => {
                self.install_dataset(points)?;
                if self.dataset.is_empty() {
                    return Ok(self.clear_to_empty(NO_DATA_MESSAGE.to_owned()));
                }
                self.draw_markers();
                self.draw_path();
                Ok(RenderOutcome::Drawn {
                    points: self.dataset.len(),
                })
            }
        }
    }

    /// Removes markers and path, keeping the current scales and zoom.
    ///
    /// Hover stays off until markers are drawn again.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.tooltip = None;
    }

    fn draw_markers(&mut self) {
        let entry_duration_s = self.config.markers.entry_duration_ms / 1000.0;
        let join = self.scene.join_markers(self.dataset.keys(), entry_duration_s);
        debug!(
            entered = join.entered,
            updated = join.updated,
            exited = join.exited,
            "markers joined"
        );
    }

    fn draw_path(&mut self) {
        let draw_in_s = self.config.path.draw_in_duration_ms / 1000.0;
        if self.scene.set_path(self.dataset_generation, draw_in_s) {
            debug!(generation = self.dataset_generation, "path draw-in started");
        }
    }

    fn clear_to_empty(&mut self, message: String) -> RenderOutcome {
        self.clear();
        debug!(%message, "rendering empty plot");
        RenderOutcome::Empty { message }
    }

    /// Validates `points` and makes them the current dataset.
    ///
    /// Returns `false` when the validated data equals the current dataset so
    /// scales, projection and index are reused. A rejected dataset clears the
    /// plot before the error is returned.
    pub(super) fn install_dataset(&mut self, points: Vec<DataPoint>) -> PlotResult<bool> {
        let dataset = match Dataset::new(points, self.config.invalid_point_policy) {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(error = %err, "dataset rejected; clearing plot");
                self.replace_dataset(Dataset::default())?;
                self.clear();
                return Err(err);
            }
        };

        if self.spatial_index.is_some() && dataset == self.dataset {
            return Ok(false);
        }
        self.replace_dataset(dataset)?;
        Ok(true)
    }

    fn replace_dataset(&mut self, dataset: Dataset) -> PlotResult<()> {
        let base_scales =
            PlotScales::build(&dataset, self.config.size, self.config.scale_domain_policy)?;
        let base_projection = project_points(dataset.points(), base_scales.x, base_scales.y)?;
        if base_projection
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(PlotError::InvalidData(
                "projection produced non-finite coordinates".to_owned(),
            ));
        }
        let visible_scales = base_scales.rescaled(self.transform)?;
        let spatial_index = SpatialIndex::build(&base_projection);

        self.dataset_generation += 1;
        self.scene.clear_path();
        self.tooltip = None;
        self.base_scales = base_scales;
        self.visible_scales = visible_scales;
        self.base_projection = base_projection;
        self.spatial_index = Some(spatial_index);
        self.dataset = dataset;

        debug!(
            points = self.dataset.len(),
            generation = self.dataset_generation,
            x_domain = ?self.base_scales.x.domain(),
            y_domain = ?self.base_scales.y.domain(),
            "dataset installed"
        );
        Ok(())
    }
}
