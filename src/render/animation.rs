/// Cubic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// Time-bounded animation clock advanced by the host frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    elapsed_s: f64,
    duration_s: f64,
}

impl Transition {
    /// A zero (or negative/non-finite) duration yields an already finished
    /// transition.
    #[must_use]
    pub fn new(duration_s: f64) -> Self {
        let duration_s = if duration_s.is_finite() {
            duration_s.max(0.0)
        } else {
            0.0
        };
        Self {
            elapsed_s: 0.0,
            duration_s,
        }
    }

    pub fn advance(&mut self, delta_s: f64) {
        if delta_s.is_finite() && delta_s > 0.0 {
            self.elapsed_s = (self.elapsed_s + delta_s).min(self.duration_s);
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed_s >= self.duration_s
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.duration_s <= 0.0 {
            return 1.0;
        }
        (self.elapsed_s / self.duration_s).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn eased(self) -> f64 {
        ease_cubic_in_out(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn transition_saturates_at_duration() {
        let mut transition = Transition::new(0.25);
        transition.advance(0.1);
        assert!(!transition.is_finished());
        transition.advance(1.0);
        assert!(transition.is_finished());
        assert_eq!(transition.progress(), 1.0);
    }
}
