//! Adapters between the market-data loader and plot points.
//!
//! Fetching is the host's job; this module only understands what the loader
//! hands back: grouped-daily aggregate records and the loader's
//! `[...] | {"error": true, "message": ...}` result shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::DataPoint;
use crate::core::primitives::{decimal_to_f64, millis_to_iso_date};
use crate::error::{PlotError, PlotResult};

/// One OHLC(+volume) record for a ticker over a time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    #[serde(rename = "T", default)]
    pub ticker: String,
    #[serde(rename = "o")]
    pub open: Decimal,
    #[serde(rename = "h")]
    pub high: Decimal,
    #[serde(rename = "l")]
    pub low: Decimal,
    #[serde(rename = "c")]
    pub close: Decimal,
    #[serde(rename = "v")]
    pub volume: Decimal,
    #[serde(rename = "vw", default)]
    pub vwap: Option<Decimal>,
    /// Bucket start, epoch milliseconds.
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "n", default)]
    pub transactions: Option<u64>,
}

impl Aggregate {
    /// Close-versus-open change in percent; `None` when open is zero.
    #[must_use]
    pub fn change_percent(&self) -> Option<Decimal> {
        if self.open.is_zero() {
            return None;
        }
        let delta = self.close.checked_sub(self.open)?;
        delta
            .checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(self.open)
    }

    fn field(&self, field: AggregateField) -> Option<Decimal> {
        match field {
            AggregateField::Open => Some(self.open),
            AggregateField::High => Some(self.high),
            AggregateField::Low => Some(self.low),
            AggregateField::Close => Some(self.close),
            AggregateField::Volume => Some(self.volume),
            AggregateField::Vwap => self.vwap,
            AggregateField::Transactions => self.transactions.map(Decimal::from),
        }
    }
}

/// Envelope of the grouped-daily endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedDailyResponse {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "resultsCount", default)]
    pub results_count: usize,
    #[serde(default)]
    pub results: Vec<Aggregate>,
}

impl GroupedDailyResponse {
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse grouped daily response: {e}"))
        })
    }
}

/// Numeric column of an [`Aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateField {
    Open,
    High,
    Low,
    Close,
    Volume,
    Vwap,
    Transactions,
}

/// Source of the point label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AggregateLabel {
    /// Market-wide view: one point per ticker.
    #[default]
    Ticker,
    /// Single-ticker history: one point per day, labelled `YYYY-MM-DD`.
    Date,
}

/// How aggregates become plot points. `z` is always the close/open change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatePointMapping {
    pub x: AggregateField,
    pub y: AggregateField,
    pub label: AggregateLabel,
}

impl Default for AggregatePointMapping {
    fn default() -> Self {
        Self {
            x: AggregateField::Volume,
            y: AggregateField::Close,
            label: AggregateLabel::Ticker,
        }
    }
}

impl AggregatePointMapping {
    /// Maps one record; `Ok(None)` when the record has no usable value.
    pub fn map(&self, aggregate: &Aggregate) -> PlotResult<Option<DataPoint>> {
        let (Some(x), Some(y), Some(z)) = (
            aggregate.field(self.x),
            aggregate.field(self.y),
            aggregate.change_percent(),
        ) else {
            return Ok(None);
        };

        let name = match self.label {
            AggregateLabel::Ticker => aggregate.ticker.clone(),
            AggregateLabel::Date => millis_to_iso_date(aggregate.timestamp)
                .unwrap_or_else(|| aggregate.timestamp.to_string()),
        };

        Ok(Some(DataPoint::new(
            name,
            decimal_to_f64(x, "x")?,
            decimal_to_f64(y, "y")?,
            decimal_to_f64(z, "change percent")?,
            aggregate.timestamp,
        )))
    }

    /// Maps every record, skipping those that cannot land on a log-log plot.
    #[must_use]
    pub fn map_all(&self, aggregates: &[Aggregate]) -> Vec<DataPoint> {
        let mut points = Vec::with_capacity(aggregates.len());
        for aggregate in aggregates {
            match self.map(aggregate) {
                Ok(Some(point)) if point.plot_violation().is_none() => points.push(point),
                Ok(Some(point)) => {
                    debug!(ticker = %aggregate.ticker, x = point.x, y = point.y, "skipping non-positive aggregate");
                }
                Ok(None) => {
                    debug!(ticker = %aggregate.ticker, "skipping aggregate without mapped fields");
                }
                Err(err) => {
                    warn!(ticker = %aggregate.ticker, error = %err, "skipping unmappable aggregate");
                }
            }
        }
        points
    }
}

/// What the data loader resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadResult {
    Loaded(Vec<DataPoint>),
    Failed { message: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LoaderPayload {
    Points(Vec<DataPoint>),
    Failure {
        error: bool,
        #[serde(default)]
        message: String,
    },
}

impl LoadResult {
    /// Parses the loader payload: a point array or `{"error": true, "message"}`.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let payload: LoaderPayload = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse loader payload: {e}")))?;
        match payload {
            LoaderPayload::Points(points) => Ok(Self::Loaded(points)),
            LoaderPayload::Failure {
                error: true,
                message,
            } => Ok(Self::Failed { message }),
            LoaderPayload::Failure { error: false, .. } => Err(PlotError::InvalidData(
                "loader payload has `error: false` but no points".to_owned(),
            )),
        }
    }

    #[must_use]
    pub fn from_aggregates(aggregates: &[Aggregate], mapping: AggregatePointMapping) -> Self {
        Self::Loaded(mapping.map_all(aggregates))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
