mod animation_controller;
mod axis_ticks;
mod behavior_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod point_click_bridge;
mod render_frame_builder;
mod scale_manager;
mod tooltip_controller;
mod tooltip_format;
mod validation;
mod zoom_controller;

pub use axis_ticks::{format_si, log_tick_labels};
pub use data_controller::RenderOutcome;
pub use engine::PlotEngine;
pub use engine_config::{
    AxisStyle, MarkerStyle, PathStyle, PlotEngineConfig, ScaleDomainPolicy, TooltipBehavior,
    TooltipLabels, ZoomBehavior,
};
pub use point_click_bridge::{PointClickEvent, PointClickHandler};
pub use scale_manager::PlotScales;
pub use tooltip_controller::{TooltipState, tooltip_placement};
pub use tooltip_format::{format_change_percent, format_value};
