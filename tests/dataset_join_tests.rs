use market_scatter::PlotError;
use market_scatter::api::{PlotEngine, PlotEngineConfig, ScaleDomainPolicy};
use market_scatter::core::{DataPoint, InvalidPointPolicy, Margin, PointKey};
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

fn key(name: &str) -> PointKey {
    PointKey {
        name: name.to_owned(),
        time: 0,
        ordinal: 0,
    }
}

#[test]
fn rerendering_same_points_is_idempotent() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    engine.tick(1.0).expect("tick");

    engine.render_points(sample_points()).expect("render again");
    assert_eq!(engine.scene().marker_count(), 3);
    // Fade state survives, so nothing restarts.
    assert!(!engine.is_animating());

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.circles.len(), 3);
    assert!(frame.circles.iter().all(|circle| circle.opacity == 1.0));
}

#[test]
fn rerendering_same_path_keeps_draw_in_progress() {
    let mut engine = build_engine();
    engine.render_path(sample_points()).expect("render path");
    engine.tick(1.0).expect("tick");
    let revealed = engine.scene().path().expect("path").revealed();

    engine.render_path(sample_points()).expect("render path again");
    let path = engine.scene().path().expect("path");
    assert_eq!(path.revealed(), revealed);
}

#[test]
fn different_dataset_replaces_markers() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    engine.tick(1.0).expect("tick");

    engine
        .render_points(vec![
            DataPoint::new("ADA", 2.0, 2.0, 1.0, 0),
            DataPoint::new("XRP", 20.0, 20.0, -1.0, 0),
        ])
        .expect("render new points");
    assert_eq!(engine.scene().marker_count(), 2);
    assert!(engine.scene().marker(&key("BTC")).is_none());
    assert_eq!(engine.scene().marker(&key("ADA")).expect("ADA").opacity(), 0.0);
}

#[test]
fn overlapping_dataset_keeps_surviving_markers() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    engine.tick(1.0).expect("tick");

    engine
        .render_points(vec![
            DataPoint::new("ETH", 10.0, 100.0, -3.0, 0),
            DataPoint::new("DOGE", 5.0, 50.0, 8.0, 0),
        ])
        .expect("render overlapping points");

    let scene = engine.scene();
    assert_eq!(scene.marker_count(), 2);
    let eth = scene.marker(&key("ETH")).expect("ETH survives");
    assert_eq!(eth.index, 0);
    assert_eq!(eth.opacity(), 1.0);
    assert_eq!(scene.marker(&key("DOGE")).expect("DOGE").opacity(), 0.0);
}

#[test]
fn new_dataset_restarts_path_draw_in() {
    let mut engine = build_engine();
    engine.render_path(sample_points()).expect("render path");
    engine.tick(2.0).expect("tick");
    assert_eq!(engine.scene().path().expect("path").revealed(), 1.0);

    let mut shifted = sample_points();
    shifted[0].y = 20.0;
    engine.render_path(shifted).expect("render shifted path");
    assert_eq!(engine.scene().path().expect("path").revealed(), 0.0);
}

#[test]
fn invalid_point_rejects_dataset_and_clears_plot() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");

    let err = engine
        .render_points(vec![
            DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
            DataPoint::new("ZERO", 0.0, 10.0, 1.0, 0),
        ])
        .expect_err("zero volume cannot sit on a log axis");
    assert!(matches!(err, PlotError::Validation { index: 1, .. }));
    assert_eq!(engine.scene().marker_count(), 0);
    assert!(engine.dataset().is_empty());
}

#[test]
fn filter_policy_drops_invalid_points() {
    let config = PlotEngineConfig::new(400.0, 300.0)
        .with_invalid_point_policy(InvalidPointPolicy::Filter);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    let outcome = engine
        .render_points(vec![
            DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
            DataPoint::new("NEG", 5.0, -2.0, 1.0, 0),
            DataPoint::new("ETH", 10.0, 100.0, f64::NAN, 0),
            DataPoint::new("SOL", 100.0, 1000.0, 0.0, 0),
        ])
        .expect("render points");
    assert_eq!(outcome, market_scatter::RenderOutcome::Drawn { points: 2 });
    assert_eq!(engine.dataset().get(1).expect("second point").name, "SOL");
}

#[test]
fn duplicate_points_get_their_own_markers() {
    let mut engine = build_engine();
    engine
        .render_points(vec![
            DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
            DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
        ])
        .expect("render points");
    assert_eq!(engine.scene().marker_count(), 2);
}

#[test]
fn single_point_sits_in_the_middle() {
    let mut engine = build_engine();
    engine
        .render_points(vec![DataPoint::new("BTC", 42.0, 7.0, 0.0, 0)])
        .expect("render points");
    let (x, y) = engine.marker_position(0).expect("marker");
    assert!((x - 200.0).abs() <= 1e-9);
    assert!((y - 150.0).abs() <= 1e-9);
}

#[test]
fn clear_removes_markers_but_keeps_scales() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    let scales = engine.base_scales();

    engine.clear();
    assert_eq!(engine.scene().marker_count(), 0);
    assert!(engine.scene().path().is_none());
    assert_eq!(engine.base_scales(), scales);
}

#[test]
fn nice_policy_rounds_domains_to_decades() {
    let mut engine = build_engine();
    engine
        .render_points(vec![
            DataPoint::new("A", 3.0, 20.0, 1.0, 0),
            DataPoint::new("B", 420.0, 5000.0, -1.0, 0),
        ])
        .expect("render points");
    assert_eq!(engine.base_scales().x.domain(), (3.0, 420.0));

    engine
        .set_scale_domain_policy(ScaleDomainPolicy::Nice)
        .expect("nice policy");
    assert_eq!(engine.base_scales().x.domain(), (1.0, 1000.0));
    assert_eq!(engine.base_scales().y.domain(), (10.0, 10_000.0));
    assert_eq!(engine.config().scale_domain_policy, ScaleDomainPolicy::Nice);
}

#[test]
fn path_for_new_dataset_drops_previous_markers() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    engine.tick(1.0).expect("tick");

    engine
        .render_path(vec![
            DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
            DataPoint::new("ADA", 2.0, 2.0, 1.0, 0),
            DataPoint::new("XRP", 20.0, 20.0, -1.0, 0),
        ])
        .expect("render path");

    assert_eq!(engine.scene().marker_count(), 0);
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.circles.is_empty());
    assert_eq!(frame.paths.len(), 1);
}

#[test]
fn path_for_same_dataset_keeps_markers() {
    let mut engine = build_engine();
    engine.render_points(sample_points()).expect("render points");
    engine.render_path(sample_points()).expect("render path");

    assert_eq!(engine.scene().marker_count(), 3);
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.circles.len(), 3);
    assert_eq!(frame.paths.len(), 1);
}
