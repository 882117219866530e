use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};

/// What to do with points that cannot sit on a log-log plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InvalidPointPolicy {
    /// Fail the whole render call with [`PlotError::Validation`].
    #[default]
    Reject,
    /// Drop offending points and plot the rest.
    Filter,
}

/// Stable identity of a point across re-renders.
///
/// Name and timestamp identify a point; `ordinal` separates exact duplicates
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointKey {
    pub name: String,
    pub time: i64,
    pub ordinal: u32,
}

/// Ordered, validated set of points ready for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Validates `points` according to `policy`.
    ///
    /// Insertion order is kept; with [`InvalidPointPolicy::Filter`] the
    /// surviving points are renumbered densely.
    pub fn new(points: Vec<DataPoint>, policy: InvalidPointPolicy) -> PlotResult<Self> {
        match policy {
            InvalidPointPolicy::Reject => {
                if let Some((index, reason)) = points
                    .iter()
                    .enumerate()
                    .find_map(|(index, point)| point.plot_violation().map(|r| (index, r)))
                {
                    return Err(PlotError::Validation { index, reason });
                }
                Ok(Self { points })
            }
            InvalidPointPolicy::Filter => {
                let total = points.len();
                let points: Vec<DataPoint> = points
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, point)| match point.plot_violation() {
                        Some(reason) => {
                            warn!(index, name = %point.name, %reason, "dropping unplottable point");
                            None
                        }
                        None => Some(point),
                    })
                    .collect();
                if points.len() != total {
                    warn!(
                        dropped = total - points.len(),
                        kept = points.len(),
                        "dataset filtered before plotting"
                    );
                }
                Ok(Self { points })
            }
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// `(min, max)` of x, `None` when empty.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.x))
    }

    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.y))
    }

    /// Keys for every point, aligned with [`Dataset::points`].
    #[must_use]
    pub fn keys(&self) -> Vec<PointKey> {
        let mut seen: HashMap<(&str, i64), u32> = HashMap::with_capacity(self.points.len());
        self.points
            .iter()
            .map(|point| {
                let ordinal = seen.entry((point.name.as_str(), point.time)).or_insert(0);
                let key = PointKey {
                    name: point.name.clone(),
                    time: point.time,
                    ordinal: *ordinal,
                };
                *ordinal += 1;
                key
            })
            .collect()
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((low, high)) => Some((low.min(value), high.max(value))),
    })
}
