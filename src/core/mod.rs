pub mod aggregate;
pub mod color_scale;
pub mod curve;
pub mod dataset;
pub mod primitives;
pub mod projection;
pub mod scale;
pub mod spatial_index;
pub mod transform;
pub mod types;

pub use aggregate::{
    Aggregate, AggregateField, AggregateLabel, AggregatePointMapping, GroupedDailyResponse,
    LoadResult,
};
pub use color_scale::SymlogColorScale;
pub use curve::{CubicSegment, DEFAULT_CARDINAL_TENSION, cardinal_spline, path_length};
pub use dataset::{Dataset, InvalidPointPolicy, PointKey};
pub use projection::{ProjectedPoint, project_points};
pub use scale::LogScale;
pub use spatial_index::SpatialIndex;
pub use transform::{ContentBox, ZoomTransform};
pub use types::{DataPoint, Margin, PlotSize, Viewport};
