use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Pixel size of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel insets between the surface bounds and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(self) -> PlotResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 30.0, 50.0, 70.0)
    }
}

/// Width and height of the plotting area, margins excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl PlotSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(PlotError::InvalidData(
                "plot width and height must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Full surface size including margins, rounded up to whole pixels.
    #[must_use]
    pub fn surface_viewport(self, margin: Margin) -> Viewport {
        Viewport::new(
            (self.width + margin.horizontal()).ceil() as u32,
            (self.height + margin.vertical()).ceil() as u32,
        )
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// One market-aggregate observation.
///
/// `x` and `y` land on logarithmic axes and must be strictly positive; `z` is
/// a signed percentage driving the marker color; `time` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub time: i64,
}

impl DataPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64, time: i64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
            time,
        }
    }

    /// Reason why this point cannot be plotted, if any.
    #[must_use]
    pub fn plot_violation(&self) -> Option<String> {
        if !self.x.is_finite() || self.x <= 0.0 {
            return Some(format!(
                "x must be finite and > 0 for a log scale (got {})",
                self.x
            ));
        }
        if !self.y.is_finite() || self.y <= 0.0 {
            return Some(format!(
                "y must be finite and > 0 for a log scale (got {})",
                self.y
            ));
        }
        if !self.z.is_finite() {
            return Some(format!("z must be finite (got {})", self.z));
        }
        None
    }
}
