use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_CARDINAL_TENSION, InvalidPointPolicy, Margin, PlotSize};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// How base scale domains are derived from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleDomainPolicy {
    /// Exact data extent.
    #[default]
    Extent,
    /// Extent widened to the enclosing powers of ten.
    Nice,
}

/// Zoom/pan limits and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Pointer travel (px) under which a press/release still counts as a click.
    pub click_tolerance_px: f64,
    /// A wheel gesture ends after this long without wheel input.
    pub wheel_idle_timeout_ms: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 20.0,
            click_tolerance_px: 2.0,
            wheel_idle_timeout_ms: 150.0,
        }
    }
}

/// Row labels of the tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLabels {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for TooltipLabels {
    fn default() -> Self {
        Self {
            x: "volume".to_owned(),
            y: "close".to_owned(),
            z: "value change".to_owned(),
        }
    }
}

/// Hover threshold and overlay placement constants.
///
/// Placement: the overlay sits `right_offset_px` to the right of the pointer
/// unless the pointer is beyond `flip_left_ratio` of the width, then
/// `left_offset_px` (negative) is used. Vertically `default_offset_px`
/// applies, replaced by `near_bottom_offset_px` past `flip_up_ratio` and
/// `near_top_offset_px` before `flip_down_ratio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipBehavior {
    /// Hover is shown when the on-screen distance is strictly below this.
    pub distance_threshold_px: f64,
    pub flip_left_ratio: f64,
    pub flip_down_ratio: f64,
    pub flip_up_ratio: f64,
    pub right_offset_px: f64,
    pub left_offset_px: f64,
    pub default_offset_px: f64,
    pub near_top_offset_px: f64,
    pub near_bottom_offset_px: f64,
    pub width_px: f64,
    pub font_size_px: f64,
    #[serde(default)]
    pub labels: TooltipLabels,
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            distance_threshold_px: 30.0,
            flip_left_ratio: 0.85,
            flip_down_ratio: 0.10,
            flip_up_ratio: 0.90,
            right_offset_px: 100.0,
            left_offset_px: -250.0,
            default_offset_px: -50.0,
            near_top_offset_px: 30.0,
            near_bottom_offset_px: -120.0,
            width_px: 150.0,
            font_size_px: 12.0,
            labels: TooltipLabels::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius_px: f64,
    pub hover_radius_px: f64,
    pub entry_duration_ms: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius_px: 2.0,
            hover_radius_px: 5.0,
            entry_duration_ms: 250.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub tension: f64,
    pub stroke_width_px: f64,
    pub color: Color,
    pub draw_in_duration_ms: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            tension: DEFAULT_CARDINAL_TENSION,
            stroke_width_px: 3.0,
            color: Color::from_rgb8(0xaa, 0xaa, 0xaa).with_alpha(0x55 as f64 / 255.0),
            draw_in_duration_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    #[serde(default)]
    pub x_title: Option<String>,
    #[serde(default)]
    pub y_title: Option<String>,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub tick_size_px: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            x_title: None,
            y_title: None,
            x_tick_count: 10,
            y_tick_count: 10,
            tick_size_px: 6.0,
            font_size_px: 10.0,
            color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist plot setup; every section except the
/// plot size falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub size: PlotSize,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
    #[serde(default)]
    pub markers: MarkerStyle,
    #[serde(default)]
    pub path: PathStyle,
    #[serde(default)]
    pub axes: AxisStyle,
    #[serde(default)]
    pub scale_domain_policy: ScaleDomainPolicy,
    #[serde(default)]
    pub invalid_point_policy: InvalidPointPolicy,
}

impl PlotEngineConfig {
    /// Config with default styling for a `width × height` plotting area.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: PlotSize::new(width, height),
            margin: Margin::default(),
            zoom: ZoomBehavior::default(),
            tooltip: TooltipBehavior::default(),
            markers: MarkerStyle::default(),
            path: PathStyle::default(),
            axes: AxisStyle::default(),
            scale_domain_policy: ScaleDomainPolicy::default(),
            invalid_point_policy: InvalidPointPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, zoom: ZoomBehavior) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_tooltip_behavior(mut self, tooltip: TooltipBehavior) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.axes.x_title = Some(x_title.into());
        self.axes.y_title = Some(y_title.into());
        self
    }

    #[must_use]
    pub fn with_scale_domain_policy(mut self, policy: ScaleDomainPolicy) -> Self {
        self.scale_domain_policy = policy;
        self
    }

    #[must_use]
    pub fn with_invalid_point_policy(mut self, policy: InvalidPointPolicy) -> Self {
        self.invalid_point_policy = policy;
        self
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config json: {e}")))
    }
}
