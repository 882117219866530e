use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

const LOG_TICK_MULTIPLIERS: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

/// Base-10 logarithmic mapping from a strictly positive domain to a pixel range.
///
/// The range may be descending (`[height, 0]` for screen-space Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LogScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> PlotResult<Self> {
        validate_log_domain(domain_start, domain_end)?;
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(PlotError::InvalidData(
                "scale range must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Same range, new domain.
    pub fn with_domain(self, domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        Self::new(domain_start, domain_end, self.range_start, self.range_end)
    }

    /// Domain widened outward to the enclosing powers of ten.
    #[must_use]
    pub fn nice(self) -> Self {
        let (low, high) = ordered(self.domain_start, self.domain_end);
        let nice_low = 10f64.powf(low.log10().floor());
        let nice_high = 10f64.powf(high.log10().ceil());
        let (start, end) = if self.domain_start <= self.domain_end {
            (nice_low, nice_high)
        } else {
            (nice_high, nice_low)
        };
        if start == end {
            return self;
        }
        Self {
            domain_start: start,
            domain_end: end,
            ..self
        }
    }

    /// Maps a domain value to the range.
    ///
    /// Non-positive values have no logarithm and are rejected rather than
    /// mapped to NaN.
    pub fn scale(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "log scale input must be finite and > 0 (got {value})"
            )));
        }

        let normalized = (value.log10() - self.domain_start.log10())
            / (self.domain_end.log10() - self.domain_start.log10());
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a range value back to the domain.
    pub fn invert(self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        let log_start = self.domain_start.log10();
        let log_end = self.domain_end.log10();
        Ok(10f64.powf(log_start + normalized * (log_end - log_start)))
    }

    /// Tick values inside the domain, ascending.
    ///
    /// Short domains get every `k·10^i` multiple; wide domains only get
    /// powers of ten, thinned so roughly `count` survive. When the multiples
    /// are too sparse (sub-decade zoom) linear nice ticks are used instead.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let (low, high) = ordered(self.domain_start, self.domain_end);
        let log_low = low.log10();
        let log_high = high.log10();

        if log_high - log_low < count as f64 {
            let mut ticks = Vec::new();
            let first = log_low.floor() as i32;
            let last = log_high.ceil() as i32;
            for exponent in first..=last {
                let power = 10f64.powi(exponent);
                for multiplier in LOG_TICK_MULTIPLIERS {
                    let tick = power * multiplier;
                    if tick < low * (1.0 - 1e-12) {
                        continue;
                    }
                    if tick > high * (1.0 + 1e-12) {
                        break;
                    }
                    ticks.push(tick);
                }
            }
            if ticks.len() * 2 < count {
                return linear_ticks(low, high, count);
            }
            return ticks;
        }

        let first = log_low.ceil() as i32;
        let last = log_high.floor() as i32;
        let decades = (last - first).max(0) as usize;
        let step = decades.div_ceil(count).max(1);
        (first..=last)
            .step_by(step)
            .map(|exponent| 10f64.powi(exponent))
            .collect()
    }
}

fn validate_log_domain(start: f64, end: f64) -> PlotResult<()> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidData(
            "log scale domain must be finite".to_owned(),
        ));
    }
    if start <= 0.0 || end <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "log scale domain must be strictly positive (got [{start}, {end}])"
        )));
    }
    if start == end {
        return Err(PlotError::InvalidData(
            "log scale domain must be non-empty".to_owned(),
        ));
    }
    Ok(())
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Nice linear ticks over `[start, stop]` (1-2-5 steps).
pub(crate) fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || stop <= start || count == 0 {
        return Vec::new();
    }

    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let mut values: SmallVec<[f64; 16]> = SmallVec::new();
    if power >= 0.0 {
        let step = factor * 10f64.powf(power);
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        for index in first..=last {
            values.push(index as f64 * step);
        }
    } else {
        // Divide by the inverse step so 0.1-style steps stay exact.
        let inverse = 10f64.powf(-power) / factor;
        let first = (start * inverse).ceil() as i64;
        let last = (stop * inverse).floor() as i64;
        for index in first..=last {
            values.push(index as f64 / inverse);
        }
    }
    values.into_vec()
}
