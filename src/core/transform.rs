use serde::{Deserialize, Serialize};

use crate::core::LogScale;
use crate::error::{PlotError, PlotResult};

/// Uniform-scale + translate affine state applied on top of the base scales.
///
/// `screen = content · k + (x, y)`. Values are never mutated in place; every
/// operation returns a fresh transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    pub fn new(x: f64, y: f64, k: f64) -> PlotResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }
        if !k.is_finite() || k <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { x, y, k })
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn apply(self, point: (f64, f64)) -> (f64, f64) {
        (self.apply_x(point.0), self.apply_y(point.1))
    }

    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        x * self.k + self.x
    }

    #[must_use]
    pub fn apply_y(self, y: f64) -> f64 {
        y * self.k + self.y
    }

    /// Maps a screen position back into unzoomed content space.
    #[must_use]
    pub fn invert(self, point: (f64, f64)) -> (f64, f64) {
        (self.invert_x(point.0), self.invert_y(point.1))
    }

    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    #[must_use]
    pub fn invert_y(self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// Multiplies the scale, keeping the origin fixed.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        if factor == 1.0 {
            return self;
        }
        Self {
            k: self.k * factor,
            ..self
        }
    }

    /// Translates by a content-space delta (scaled by `k` on screen).
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return self;
        }
        Self {
            x: self.x + self.k * dx,
            y: self.y + self.k * dy,
            ..self
        }
    }

    /// Transform whose `k` is `k`, keeping the content point under `anchor`
    /// (screen space) fixed.
    #[must_use]
    pub fn zoom_to(self, k: f64, anchor: (f64, f64)) -> Self {
        let content = self.invert(anchor);
        Self {
            x: anchor.0 - content.0 * k,
            y: anchor.1 - content.1 * k,
            k,
        }
    }

    /// Transform that keeps `content` (unzoomed space) under `screen`.
    #[must_use]
    pub fn pin(self, content: (f64, f64), screen: (f64, f64)) -> Self {
        Self {
            x: screen.0 - content.0 * self.k,
            y: screen.1 - content.1 * self.k,
            k: self.k,
        }
    }

    /// Rescaled copy of a horizontal scale: its domain becomes whatever is
    /// visible through this transform. The input scale is left untouched.
    pub fn rescale_x(self, scale: LogScale) -> PlotResult<LogScale> {
        rescale(scale, |pixel| self.invert_x(pixel))
    }

    /// Vertical counterpart of [`ZoomTransform::rescale_x`].
    pub fn rescale_y(self, scale: LogScale) -> PlotResult<LogScale> {
        rescale(scale, |pixel| self.invert_y(pixel))
    }

    /// Clamps translation so the visible window `extent` stays inside
    /// `translate_extent` (both in unzoomed content space). When the window
    /// is larger than the content (zoomed out), the content is centered.
    #[must_use]
    pub fn constrain(self, extent: ContentBox, translate_extent: ContentBox) -> Self {
        let dx0 = self.invert_x(extent.x0) - translate_extent.x0;
        let dx1 = self.invert_x(extent.x1) - translate_extent.x1;
        let dy0 = self.invert_y(extent.y0) - translate_extent.y0;
        let dy1 = self.invert_y(extent.y1) - translate_extent.y1;
        self.translate(constrain_axis(dx0, dx1), constrain_axis(dy0, dy1))
    }
}

fn constrain_axis(low_overshoot: f64, high_overshoot: f64) -> f64 {
    if high_overshoot > low_overshoot {
        (low_overshoot + high_overshoot) / 2.0
    } else if low_overshoot < 0.0 {
        low_overshoot
    } else if high_overshoot > 0.0 {
        high_overshoot
    } else {
        0.0
    }
}

fn rescale(scale: LogScale, invert_pixel: impl Fn(f64) -> f64) -> PlotResult<LogScale> {
    let (range_start, range_end) = scale.range();
    let domain_start = scale.invert(invert_pixel(range_start))?;
    let domain_end = scale.invert(invert_pixel(range_end))?;
    scale.with_domain(domain_start, domain_end)
}

/// Axis-aligned box `[x0, x1] × [y0, y1]` in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ContentBox {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}
