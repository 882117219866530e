use crate::core::{Dataset, LogScale, PlotSize, SymlogColorScale, ZoomTransform};
use crate::error::PlotResult;

use super::ScaleDomainPolicy;

/// Domain used on both axes while no data is plotted.
const EMPTY_DOMAIN: (f64, f64) = (1.0, 10.0);

/// `√10`, half a decade on a log axis.
const HALF_DECADE: f64 = 3.162_277_660_168_379_5;

/// The three mappings of one plot: x and y to pixels, z to a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScales {
    pub x: LogScale,
    pub y: LogScale,
    pub color: SymlogColorScale,
}

impl PlotScales {
    /// Base scales for `dataset`: x onto `[0, width]`, y onto `[height, 0]`.
    pub(super) fn build(
        dataset: &Dataset,
        size: PlotSize,
        policy: ScaleDomainPolicy,
    ) -> PlotResult<Self> {
        let (x_start, x_end) = axis_domain(dataset.x_extent());
        let (y_start, y_end) = axis_domain(dataset.y_extent());
        let mut x = LogScale::new(x_start, x_end, 0.0, size.width)?;
        let mut y = LogScale::new(y_start, y_end, size.height, 0.0)?;
        if policy == ScaleDomainPolicy::Nice {
            x = x.nice();
            y = y.nice();
        }
        let color = SymlogColorScale::from_values(dataset.points().iter().map(|point| point.z))?;
        Ok(Self { x, y, color })
    }

    /// Copy whose x/y domains are the window visible through `transform`.
    pub fn rescaled(self, transform: ZoomTransform) -> PlotResult<Self> {
        if transform.is_identity() {
            return Ok(self);
        }
        Ok(Self {
            x: transform.rescale_x(self.x)?,
            y: transform.rescale_y(self.y)?,
            color: self.color,
        })
    }
}

fn axis_domain(extent: Option<(f64, f64)>) -> (f64, f64) {
    match extent {
        None => EMPTY_DOMAIN,
        // A single distinct value still needs a decade to spread over.
        Some((min, max)) if min == max => (min / HALF_DECADE, max * HALF_DECADE),
        Some(extent) => extent,
    }
}
