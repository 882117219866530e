use market_scatter::PlotError;
use market_scatter::api::{
    MarkerStyle, PathStyle, PlotEngine, PlotEngineConfig, ScaleDomainPolicy, TooltipBehavior,
    ZoomBehavior,
};
use market_scatter::core::{InvalidPointPolicy, Margin};
use market_scatter::render::NullRenderer;

#[test]
fn defaults_match_reference_layout() {
    let config = PlotEngineConfig::new(400.0, 300.0);
    assert_eq!(config.margin, Margin::new(20.0, 30.0, 50.0, 70.0));
    assert_eq!(config.zoom.min_scale, 0.5);
    assert_eq!(config.zoom.max_scale, 20.0);
    assert_eq!(config.tooltip.distance_threshold_px, 30.0);
    assert_eq!(config.markers.radius_px, 2.0);
    assert_eq!(config.markers.hover_radius_px, 5.0);
    assert_eq!(config.path.tension, 0.75);
    assert_eq!(config.scale_domain_policy, ScaleDomainPolicy::Extent);
    assert_eq!(config.invalid_point_policy, InvalidPointPolicy::Reject);
}

#[test]
fn config_json_round_trip() {
    let config = PlotEngineConfig::new(640.0, 480.0)
        .with_margin(Margin::uniform(12.0))
        .with_axis_titles("volume", "close")
        .with_scale_domain_policy(ScaleDomainPolicy::Nice);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlotEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn omitted_sections_fall_back_to_defaults() {
    let parsed = PlotEngineConfig::from_json_str(r#"{"size": {"width": 640, "height": 480}}"#)
        .expect("parse");
    assert_eq!(parsed, PlotEngineConfig::new(640.0, 480.0));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = PlotEngineConfig::from_json_str("{").expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn engine_reports_surface_viewport() {
    let engine = PlotEngine::new(NullRenderer::default(), PlotEngineConfig::new(400.0, 300.0))
        .expect("engine init");
    let viewport = engine.viewport();
    assert_eq!((viewport.width, viewport.height), (500, 370));
}

#[test]
fn engine_rejects_invalid_size_and_margin() {
    assert!(PlotEngine::new(NullRenderer::default(), PlotEngineConfig::new(0.0, 300.0)).is_err());
    assert!(
        PlotEngine::new(NullRenderer::default(), PlotEngineConfig::new(400.0, f64::NAN)).is_err()
    );
    let negative_margin =
        PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::new(-1.0, 0.0, 0.0, 0.0));
    assert!(PlotEngine::new(NullRenderer::default(), negative_margin).is_err());
}

#[test]
fn engine_rejects_zoom_extent_without_identity() {
    let config = PlotEngineConfig::new(400.0, 300.0).with_zoom_behavior(ZoomBehavior {
        min_scale: 1.5,
        max_scale: 4.0,
        ..ZoomBehavior::default()
    });
    assert!(PlotEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn engine_rejects_crossed_tooltip_flip_ratios() {
    let config = PlotEngineConfig::new(400.0, 300.0).with_tooltip_behavior(TooltipBehavior {
        flip_down_ratio: 0.95,
        ..TooltipBehavior::default()
    });
    assert!(PlotEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn style_setters_validate_before_applying() {
    let mut engine = PlotEngine::new(NullRenderer::default(), PlotEngineConfig::new(400.0, 300.0))
        .expect("engine init");

    let bad_marker = MarkerStyle {
        radius_px: 0.0,
        ..MarkerStyle::default()
    };
    assert!(engine.set_marker_style(bad_marker).is_err());
    assert_eq!(engine.config().markers, MarkerStyle::default());

    let bad_path = PathStyle {
        tension: 1.5,
        ..PathStyle::default()
    };
    assert!(engine.set_path_style(bad_path).is_err());

    let bigger = MarkerStyle {
        radius_px: 4.0,
        ..MarkerStyle::default()
    };
    engine.set_marker_style(bigger).expect("marker style");
    assert_eq!(engine.config().markers.radius_px, 4.0);
}

#[test]
fn invalid_point_policy_can_change_at_runtime() {
    let mut engine = PlotEngine::new(NullRenderer::default(), PlotEngineConfig::new(400.0, 300.0))
        .expect("engine init");
    engine.set_invalid_point_policy(InvalidPointPolicy::Filter);
    assert_eq!(engine.config().invalid_point_policy, InvalidPointPolicy::Filter);
}
