use crate::error::{PlotError, PlotResult};

use super::{AxisStyle, MarkerStyle, PathStyle, PlotEngineConfig, TooltipBehavior, ZoomBehavior};

pub(super) fn validate_config(config: &PlotEngineConfig) -> PlotResult<()> {
    config.size.validate()?;
    config.margin.validate()?;
    validate_zoom_behavior(config.zoom)?;
    validate_tooltip_behavior(&config.tooltip)?;
    validate_marker_style(config.markers)?;
    validate_path_style(config.path)?;
    validate_axis_style(&config.axes)?;
    Ok(())
}

pub(super) fn validate_zoom_behavior(behavior: ZoomBehavior) -> PlotResult<ZoomBehavior> {
    if !behavior.min_scale.is_finite() || behavior.min_scale <= 0.0 {
        return Err(PlotError::InvalidData(
            "zoom min_scale must be finite and > 0".to_owned(),
        ));
    }
    if !behavior.max_scale.is_finite() || behavior.max_scale < behavior.min_scale {
        return Err(PlotError::InvalidData(
            "zoom max_scale must be finite and >= min_scale".to_owned(),
        ));
    }
    if !(behavior.min_scale..=behavior.max_scale).contains(&1.0) {
        return Err(PlotError::InvalidData(
            "zoom scale extent must include the identity scale 1".to_owned(),
        ));
    }
    non_negative(behavior.click_tolerance_px, "zoom click_tolerance_px")?;
    non_negative(behavior.wheel_idle_timeout_ms, "zoom wheel_idle_timeout_ms")?;
    Ok(behavior)
}

pub(super) fn validate_tooltip_behavior(behavior: &TooltipBehavior) -> PlotResult<()> {
    if !behavior.distance_threshold_px.is_finite() || behavior.distance_threshold_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "tooltip distance threshold must be finite and > 0".to_owned(),
        ));
    }
    for (name, ratio) in [
        ("flip_left_ratio", behavior.flip_left_ratio),
        ("flip_down_ratio", behavior.flip_down_ratio),
        ("flip_up_ratio", behavior.flip_up_ratio),
    ] {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(PlotError::InvalidData(format!(
                "tooltip `{name}` must be finite and in [0, 1]"
            )));
        }
    }
    if behavior.flip_down_ratio >= behavior.flip_up_ratio {
        return Err(PlotError::InvalidData(
            "tooltip flip_down_ratio must be < flip_up_ratio".to_owned(),
        ));
    }
    for (name, offset) in [
        ("right_offset_px", behavior.right_offset_px),
        ("left_offset_px", behavior.left_offset_px),
        ("default_offset_px", behavior.default_offset_px),
        ("near_top_offset_px", behavior.near_top_offset_px),
        ("near_bottom_offset_px", behavior.near_bottom_offset_px),
    ] {
        if !offset.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "tooltip `{name}` must be finite"
            )));
        }
    }
    positive(behavior.width_px, "tooltip width_px")?;
    positive(behavior.font_size_px, "tooltip font_size_px")?;
    Ok(())
}

pub(super) fn validate_marker_style(style: MarkerStyle) -> PlotResult<MarkerStyle> {
    positive(style.radius_px, "marker radius_px")?;
    positive(style.hover_radius_px, "marker hover_radius_px")?;
    non_negative(style.entry_duration_ms, "marker entry_duration_ms")?;
    Ok(style)
}

pub(super) fn validate_path_style(style: PathStyle) -> PlotResult<PathStyle> {
    if !style.tension.is_finite() || !(0.0..=1.0).contains(&style.tension) {
        return Err(PlotError::InvalidData(
            "path tension must be finite and in [0, 1]".to_owned(),
        ));
    }
    positive(style.stroke_width_px, "path stroke_width_px")?;
    non_negative(style.draw_in_duration_ms, "path draw_in_duration_ms")?;
    style.color.validate()?;
    Ok(style)
}

pub(super) fn validate_axis_style(style: &AxisStyle) -> PlotResult<()> {
    if style.x_tick_count == 0 || style.y_tick_count == 0 {
        return Err(PlotError::InvalidData(
            "axis tick counts must be > 0".to_owned(),
        ));
    }
    non_negative(style.tick_size_px, "axis tick_size_px")?;
    positive(style.font_size_px, "axis font_size_px")?;
    style.color.validate()
}

fn positive(value: f64, name: &str) -> PlotResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn non_negative(value: f64, name: &str) -> PlotResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlotError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}
