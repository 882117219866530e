use serde::{Deserialize, Serialize};

/// Tension used for the connecting path (0 = Catmull-Rom-like, 1 = straight).
pub const DEFAULT_CARDINAL_TENSION: f64 = 0.75;

const FLATTEN_STEPS_PER_SEGMENT: usize = 16;

/// One cubic Bézier segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub to: (f64, f64),
}

impl CubicSegment {
    #[must_use]
    pub fn straight(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            from,
            control1: from,
            control2: to,
            to,
        }
    }

    #[must_use]
    pub fn point_at(self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        let a = u * u * u;
        let b = 3.0 * u * u * t;
        let c = 3.0 * u * t * t;
        let d = t * t * t;
        (
            a * self.from.0 + b * self.control1.0 + c * self.control2.0 + d * self.to.0,
            a * self.from.1 + b * self.control1.1 + c * self.control2.1 + d * self.to.1,
        )
    }

    /// Arc length approximated by a fixed-step polyline.
    #[must_use]
    pub fn length(self) -> f64 {
        let mut length = 0.0;
        let mut previous = self.from;
        for step in 1..=FLATTEN_STEPS_PER_SEGMENT {
            let next = self.point_at(step as f64 / FLATTEN_STEPS_PER_SEGMENT as f64);
            length += (next.0 - previous.0).hypot(next.1 - previous.1);
            previous = next;
        }
        length
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        [self.from, self.control1, self.control2, self.to]
            .iter()
            .all(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Cardinal spline through `points` in order.
///
/// The segment `p[i] → p[i+1]` uses controls `p[i] + k·(p[i+1] − p[i−1])` and
/// `p[i+1] − k·(p[i+2] − p[i])` with `k = (1 − tension) / 6`; missing
/// neighbours at the ends collapse the outer control onto the endpoint. Two
/// points give a straight segment, fewer give nothing.
#[must_use]
pub fn cardinal_spline(points: &[(f64, f64)], tension: f64) -> Vec<CubicSegment> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => vec![CubicSegment::straight(points[0], points[1])],
        len => {
            let k = (1.0 - tension) / 6.0;
            (0..len - 1)
                .map(|i| {
                    let from = points[i];
                    let to = points[i + 1];
                    let control1 = if i == 0 {
                        from
                    } else {
                        let before = points[i - 1];
                        (from.0 + k * (to.0 - before.0), from.1 + k * (to.1 - before.1))
                    };
                    let control2 = if i + 2 >= len {
                        to
                    } else {
                        let after = points[i + 2];
                        (to.0 - k * (after.0 - from.0), to.1 - k * (after.1 - from.1))
                    };
                    CubicSegment {
                        from,
                        control1,
                        control2,
                        to,
                    }
                })
                .collect()
        }
    }
}

#[must_use]
pub fn path_length(segments: &[CubicSegment]) -> f64 {
    segments.iter().map(|segment| segment.length()).sum()
}
