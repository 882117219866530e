use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A data point cannot be placed on the log-log plot.
    #[error("invalid point #{index}: {reason}")]
    Validation { index: usize, reason: String },

    #[error("no data to draw: {0}")]
    EmptyData(String),

    /// Lifecycle-ordering bug in the host (for example hit-testing before the
    /// first dataset was rendered).
    #[error("interaction error: {0}")]
    Interaction(String),
}
