#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataPoint, LogScale};
use crate::error::PlotResult;

/// One point projected into unzoomed plot-area pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn project_single_point(
    point: &DataPoint,
    x_scale: LogScale,
    y_scale: LogScale,
) -> PlotResult<ProjectedPoint> {
    Ok(ProjectedPoint::new(
        x_scale.scale(point.x)?,
        y_scale.scale(point.y)?,
    ))
}

/// Projects every point through the base (unzoomed) scales.
pub fn project_points(
    points: &[DataPoint],
    x_scale: LogScale,
    y_scale: LogScale,
) -> PlotResult<Vec<ProjectedPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<PlotResult<ProjectedPoint>> = points
            .par_iter()
            .map(|point| project_single_point(point, x_scale, y_scale))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(points.len());
        for point in points {
            out.push(project_single_point(point, x_scale, y_scale)?);
        }
        Ok(out)
    }
}
