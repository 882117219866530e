use serde::{Deserialize, Serialize};

/// Gesture currently driving the zoom transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Drag,
    Wheel,
}

/// Zoom/pan state machine: `Idle → Active(kind) → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Active(GestureKind),
}

/// Unit of a wheel delta, mirroring DOM `deltaMode` / GTK scroll units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// One wheel notch or trackpad scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    /// Positive values scroll down (zoom out).
    pub delta_y: f64,
    pub mode: WheelDeltaMode,
    /// Accelerates zoom tenfold (ctrl/pinch).
    pub zoom_modifier: bool,
}

impl WheelInput {
    #[must_use]
    pub fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: WheelDeltaMode::Pixel,
            zoom_modifier: false,
        }
    }

    #[must_use]
    pub fn lines(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: WheelDeltaMode::Line,
            zoom_modifier: false,
        }
    }

    /// Exponent of the zoom factor (`k' = k · 2^exponent`).
    #[must_use]
    pub fn zoom_exponent(self) -> f64 {
        let unit = match self.mode {
            WheelDeltaMode::Pixel => 0.002,
            WheelDeltaMode::Line => 0.05,
            WheelDeltaMode::Page => 1.0,
        };
        let modifier = if self.zoom_modifier { 10.0 } else { 1.0 };
        -self.delta_y * unit * modifier
    }
}

/// Pointer press that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressState {
    /// Plot-area position at press time.
    pub origin: (f64, f64),
    /// Content-space point that stays under the pointer while dragging.
    pub anchor: (f64, f64),
    pub moved: bool,
}

/// What a pointer release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseKind {
    /// Press and release without movement.
    Click { x: f64, y: f64 },
    DragEnd,
    /// Release without a matching press.
    Stray,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor: Option<(f64, f64)>,
    press: Option<PressState>,
    wheel_idle_remaining_s: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor: None,
            press: None,
            wheel_idle_remaining_s: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.mode != InteractionMode::Idle
    }

    /// Last pointer position in plot-area coordinates, `None` when outside.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn press(self) -> Option<PressState> {
        self.press
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }

    pub fn on_press(&mut self, origin: (f64, f64), anchor: (f64, f64)) {
        self.press = Some(PressState {
            origin,
            anchor,
            moved: false,
        });
    }

    /// Marks the press as a drag once the pointer moved beyond `tolerance_px`.
    ///
    /// Returns the drag anchor while dragging.
    pub fn on_press_move(&mut self, x: f64, y: f64, tolerance_px: f64) -> Option<(f64, f64)> {
        let press = self.press.as_mut()?;
        if !press.moved {
            let distance = (x - press.origin.0).hypot(y - press.origin.1);
            if distance <= tolerance_px {
                return None;
            }
            press.moved = true;
            self.mode = InteractionMode::Active(GestureKind::Drag);
        }
        Some(press.anchor)
    }

    pub fn on_release(&mut self) -> ReleaseKind {
        let Some(press) = self.press.take() else {
            return ReleaseKind::Stray;
        };
        if press.moved {
            if self.mode == InteractionMode::Active(GestureKind::Drag) {
                self.mode = InteractionMode::Idle;
            }
            ReleaseKind::DragEnd
        } else {
            ReleaseKind::Click {
                x: press.origin.0,
                y: press.origin.1,
            }
        }
    }

    /// Starts (or extends) a wheel gesture that ends after `idle_timeout_s`
    /// without further wheel input.
    pub fn on_wheel(&mut self, idle_timeout_s: f64) {
        if self.mode == InteractionMode::Idle {
            self.mode = InteractionMode::Active(GestureKind::Wheel);
        }
        self.wheel_idle_remaining_s = idle_timeout_s.max(0.0);
    }

    /// Advances the wheel idle timer; returns `true` when the wheel gesture ended.
    pub fn step_wheel_idle(&mut self, delta_seconds: f64) -> bool {
        if self.mode != InteractionMode::Active(GestureKind::Wheel) {
            return false;
        }
        self.wheel_idle_remaining_s -= delta_seconds.max(0.0);
        if self.wheel_idle_remaining_s <= 0.0 {
            self.wheel_idle_remaining_s = 0.0;
            self.mode = InteractionMode::Idle;
            return true;
        }
        false
    }

    /// Drops any in-flight gesture.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Idle;
        self.press = None;
        self.wheel_idle_remaining_s = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_without_motion_is_a_click() {
        let mut state = InteractionState::default();
        state.on_press((10.0, 20.0), (10.0, 20.0));
        assert_eq!(state.on_press_move(10.0, 20.0, 0.0), None);
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.on_release(), ReleaseKind::Click { x: 10.0, y: 20.0 });
    }

    #[test]
    fn wheel_gesture_times_out() {
        let mut state = InteractionState::default();
        state.on_wheel(0.15);
        assert_eq!(state.mode(), InteractionMode::Active(GestureKind::Wheel));
        assert!(!state.step_wheel_idle(0.1));
        assert!(state.step_wheel_idle(0.1));
        assert_eq!(state.mode(), InteractionMode::Idle);
    }
}
