use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Width of the linear region around zero, in z units (percent).
pub const DEFAULT_SYMLOG_CONSTANT: f64 = 0.1;

pub const NEGATIVE_CHANGE_COLOR: Color = Color::from_rgb8(0xc6, 0x06, 0x06);
pub const NEUTRAL_CHANGE_COLOR: Color = Color::from_rgb8(0xff, 0xff, 0xff);
pub const POSITIVE_CHANGE_COLOR: Color = Color::from_rgb8(0x00, 0xb9, 0x09);

/// Diverging color mapping for signed percentage changes.
///
/// Values pass through `sign(z)·ln(1 + |z|/c)` before a piecewise-linear
/// 3-stop interpolation, so small moves stay distinguishable while large
/// swings saturate at the domain ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymlogColorScale {
    domain: [f64; 3],
    colors: [Color; 3],
    constant: f64,
}

impl SymlogColorScale {
    pub fn new(domain: [f64; 3], colors: [Color; 3], constant: f64) -> PlotResult<Self> {
        if domain.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidData(
                "color scale domain must be finite".to_owned(),
            ));
        }
        if !(domain[0] < domain[1] && domain[1] < domain[2]) {
            return Err(PlotError::InvalidData(
                "color scale domain must be strictly increasing".to_owned(),
            ));
        }
        if !constant.is_finite() || constant <= 0.0 {
            return Err(PlotError::InvalidData(
                "symlog constant must be finite and > 0".to_owned(),
            ));
        }
        for color in colors {
            color.validate()?;
        }

        Ok(Self {
            domain,
            colors,
            constant,
        })
    }

    /// Domain `[-max_abs, 0, max_abs]` with the default red/white/green stops.
    pub fn symmetric(max_abs: f64) -> PlotResult<Self> {
        let extent = if max_abs.is_finite() && max_abs > 0.0 {
            max_abs
        } else {
            1.0
        };
        Self::new(
            [-extent, 0.0, extent],
            [
                NEGATIVE_CHANGE_COLOR,
                NEUTRAL_CHANGE_COLOR,
                POSITIVE_CHANGE_COLOR,
            ],
            DEFAULT_SYMLOG_CONSTANT,
        )
    }

    /// Symmetric scale covering the largest absolute value in `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> PlotResult<Self> {
        let max_abs = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, |acc, value| acc.max(value.abs()));
        Self::symmetric(max_abs)
    }

    #[must_use]
    pub fn domain(self) -> [f64; 3] {
        self.domain
    }

    #[must_use]
    pub fn constant(self) -> f64 {
        self.constant
    }

    #[must_use]
    pub fn color(self, value: f64) -> Color {
        if !value.is_finite() {
            return self.colors[1];
        }

        let [t0, t1, t2] = self.domain.map(|d| self.transform(d));
        let t = self.transform(value).clamp(t0, t2);
        if t <= t1 {
            self.colors[0].lerp(self.colors[1], (t - t0) / (t1 - t0))
        } else {
            self.colors[1].lerp(self.colors[2], (t - t1) / (t2 - t1))
        }
    }

    fn transform(self, value: f64) -> f64 {
        value.signum() * (value.abs() / self.constant).ln_1p()
    }
}
