use market_scatter::api::{PlotEngine, PlotEngineConfig, ZoomBehavior};
use market_scatter::core::{DataPoint, Margin, ZoomTransform};
use market_scatter::interaction::{GestureKind, InteractionMode, WheelInput};
use market_scatter::render::NullRenderer;

fn build_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::uniform(10.0));
    PlotEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
        DataPoint::new("ETH", 10.0, 100.0, -3.0, 0),
        DataPoint::new("SOL", 100.0, 1000.0, 0.0, 0),
    ]
}

#[test]
fn wheel_zoom_keeps_pointer_anchor_fixed() {
    let mut engine = build_engine();
    let changed = engine
        .wheel(210.0, 160.0, WheelInput::pixels(-100.0))
        .expect("wheel");

    assert!(changed);
    let transform = engine.transform();
    assert!((transform.k - 2f64.powf(0.2)).abs() <= 1e-9);
    let (cx, cy) = transform.invert((200.0, 150.0));
    assert!((cx - 200.0).abs() <= 1e-9);
    assert!((cy - 150.0).abs() <= 1e-9);
    assert_eq!(
        engine.interaction_mode(),
        InteractionMode::Active(GestureKind::Wheel)
    );
}

#[test]
fn wheel_outside_plot_area_is_ignored() {
    let mut engine = build_engine();
    let changed = engine
        .wheel(5.0, 5.0, WheelInput::pixels(-100.0))
        .expect("wheel");
    assert!(!changed);
    assert!(engine.transform().is_identity());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn wheel_gesture_ends_after_idle_timeout() {
    let mut engine = build_engine();
    engine
        .wheel(210.0, 160.0, WheelInput::lines(-1.0))
        .expect("wheel");

    engine.tick(0.1).expect("tick");
    assert_eq!(
        engine.interaction_mode(),
        InteractionMode::Active(GestureKind::Wheel)
    );
    engine.tick(0.1).expect("tick");
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn wheel_at_scale_limit_is_ignored() {
    let mut engine = build_engine();
    engine.zoom_by(100.0, (200.0, 150.0)).expect("zoom");
    assert_eq!(engine.transform().k, 20.0);

    let changed = engine
        .wheel(210.0, 160.0, WheelInput::pixels(-100.0))
        .expect("wheel");
    assert!(!changed);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn zoom_out_is_clamped_and_centered() {
    let mut engine = build_engine();
    engine.zoom_by(0.01, (0.0, 0.0)).expect("zoom");
    let transform = engine.transform();
    assert_eq!(transform.k, 0.5);
    assert_eq!(transform.x, 100.0);
    assert_eq!(transform.y, 75.0);
}

#[test]
fn zoom_rejects_invalid_factor() {
    let mut engine = build_engine();
    assert!(engine.zoom_by(0.0, (10.0, 10.0)).is_err());
    assert!(engine.zoom_by(f64::NAN, (10.0, 10.0)).is_err());
    assert!(engine.zoom_by(2.0, (f64::NAN, 10.0)).is_err());
}

#[test]
fn drag_pans_zoomed_plot() {
    let mut engine = build_engine();
    engine.zoom_by(2.0, (200.0, 150.0)).expect("zoom");
    assert_eq!(engine.transform().x, -200.0);

    assert!(engine.pointer_down(210.0, 160.0));
    engine.pointer_move(260.0, 160.0).expect("move");
    assert_eq!(
        engine.interaction_mode(),
        InteractionMode::Active(GestureKind::Drag)
    );
    assert!((engine.transform().x + 150.0).abs() <= 1e-9);
    assert!((engine.transform().y + 150.0).abs() <= 1e-9);

    let released = engine.pointer_up(260.0, 160.0).expect("release");
    assert!(released.is_none());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn drag_stops_at_content_edge() {
    let mut engine = build_engine();
    engine.zoom_by(2.0, (200.0, 150.0)).expect("zoom");

    assert!(engine.pointer_down(210.0, 160.0));
    engine.pointer_move(500.0, 160.0).expect("move");
    assert_eq!(engine.transform().x, 0.0);
    engine.pointer_up(500.0, 160.0).expect("release");
}

#[test]
fn press_outside_plot_area_does_not_start_drag() {
    let mut engine = build_engine();
    assert!(!engine.pointer_down(2.0, 2.0));
    engine.pointer_move(100.0, 100.0).expect("move");
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn click_without_movement_never_zooms() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");

    assert!(engine.pointer_down(210.0, 160.0));
    engine.pointer_move(211.0, 160.0).expect("jitter");
    engine.pointer_up(211.0, 160.0).expect("release");

    assert!(engine.transform().is_identity());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn reset_zoom_restores_marker_positions() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    let before = engine.marker_position(1).expect("marker");

    engine.zoom_by(3.0, (50.0, 50.0)).expect("zoom");
    let zoomed = engine.marker_position(1).expect("marker");
    assert!((zoomed.0 - before.0).abs() > 1.0);

    engine.reset_zoom().expect("reset");
    assert_eq!(engine.marker_position(1), Some(before));
    assert!(engine.transform().is_identity());
}

#[test]
fn zoom_rescales_visible_domain_but_not_base_scales() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    let base = engine.base_scales();

    engine.zoom_by(2.0, (200.0, 150.0)).expect("zoom");
    assert_eq!(engine.base_scales(), base);

    let (start, end) = engine.visible_scales().x.domain();
    assert!((start - 10f64.sqrt()).abs() <= 1e-9);
    assert!((end - 10f64.powf(1.5)).abs() <= 1e-9);
}

#[test]
fn double_click_doubles_and_shift_halves() {
    let mut engine = build_engine();
    assert!(engine.double_click(210.0, 160.0, false).expect("double click"));
    assert_eq!(engine.transform().k, 2.0);

    assert!(engine.double_click(210.0, 160.0, true).expect("double click"));
    assert_eq!(engine.transform().k, 1.0);
}

#[test]
fn set_transform_keeps_requested_scale() {
    let mut engine = build_engine();
    let transform = ZoomTransform::new(0.0, 0.0, 50.0).expect("transform");
    engine.set_transform(transform).expect("set transform");
    assert_eq!(engine.transform().k, 50.0);

    engine
        .set_zoom_behavior(ZoomBehavior::default())
        .expect("zoom behavior");
    assert_eq!(engine.transform().k, 20.0);
}

#[test]
fn zoom_behavior_must_include_identity_scale() {
    let mut engine = build_engine();
    let behavior = ZoomBehavior {
        min_scale: 2.0,
        max_scale: 10.0,
        ..ZoomBehavior::default()
    };
    assert!(engine.set_zoom_behavior(behavior).is_err());
    assert_eq!(engine.config().zoom, ZoomBehavior::default());
}

#[test]
fn tick_rejects_negative_delta() {
    let mut engine = build_engine();
    assert!(engine.tick(-0.1).is_err());
    assert!(engine.tick(f64::NAN).is_err());
    assert!(!engine.tick(0.0).expect("tick"));
}
