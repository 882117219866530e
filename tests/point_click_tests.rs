use std::cell::RefCell;
use std::rc::Rc;

use market_scatter::api::{PlotEngine, PlotEngineConfig};
use market_scatter::core::{DataPoint, Margin};
use market_scatter::render::NullRenderer;

fn build_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::uniform(10.0));
    PlotEngine::new(NullRenderer::default(), config).expect("engine init")
}

/// Index 0 drawn at plot (0, 300), index 1 at plot (400, 0).
fn corner_engine() -> PlotEngine<NullRenderer> {
    let mut engine = build_engine();
    engine
        .render_points(vec![
            DataPoint::new("BTC", 1.0, 1.0, 2.5, 1_700_000_000_000),
            DataPoint::new("ETH", 100.0, 100.0, -1.25, 1_700_000_000_000),
        ])
        .expect("render points");
    engine
}

fn click(engine: &mut PlotEngine<NullRenderer>, x: f64, y: f64) -> Option<usize> {
    assert!(engine.pointer_down(x, y));
    engine
        .pointer_up(x, y)
        .expect("release")
        .map(|event| event.index)
}

fn recording_handler(
    engine: &mut PlotEngine<NullRenderer>,
) -> Rc<RefCell<Vec<String>>> {
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicked);
    engine.set_point_click_handler(move |event| {
        sink.borrow_mut().push(event.point.name.clone());
    });
    clicked
}

#[test]
fn clicking_a_marker_invokes_handler() {
    let mut engine = corner_engine();
    let clicked = recording_handler(&mut engine);

    assert_eq!(click(&mut engine, 11.0, 309.0), Some(0));
    assert_eq!(*clicked.borrow(), vec!["BTC".to_owned()]);
}

#[test]
fn click_event_carries_the_point() {
    let mut engine = corner_engine();
    assert!(engine.pointer_down(409.0, 11.0));
    let event = engine
        .pointer_up(409.0, 11.0)
        .expect("release")
        .expect("marker hit");
    assert_eq!(event.index, 1);
    assert_eq!(event.point.name, "ETH");
    assert_eq!(event.point.z, -1.25);
}

#[test]
fn clicking_empty_space_does_nothing() {
    let mut engine = corner_engine();
    let clicked = recording_handler(&mut engine);

    assert_eq!(click(&mut engine, 200.0, 150.0), None);
    assert!(clicked.borrow().is_empty());
}

#[test]
fn hover_radius_widens_click_target() {
    let mut engine = corner_engine();

    // 4.24px from BTC: outside the resting radius.
    assert_eq!(click(&mut engine, 13.0, 307.0), None);

    engine.pointer_move(14.0, 306.0).expect("hover");
    assert_eq!(engine.hovered_index(), Some(0));
    assert_eq!(click(&mut engine, 13.0, 307.0), Some(0));
}

#[test]
fn registering_again_replaces_handler() {
    let mut engine = corner_engine();
    let first = recording_handler(&mut engine);
    let second = recording_handler(&mut engine);

    click(&mut engine, 11.0, 309.0);
    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn cleared_handler_is_not_invoked() {
    let mut engine = corner_engine();
    let clicked = recording_handler(&mut engine);
    assert!(engine.has_point_click_handler());

    assert!(engine.clear_point_click_handler());
    assert!(!engine.has_point_click_handler());
    assert!(!engine.clear_point_click_handler());

    assert_eq!(click(&mut engine, 11.0, 309.0), Some(0));
    assert!(clicked.borrow().is_empty());
}

#[test]
fn drag_release_is_not_a_click() {
    let mut engine = corner_engine();
    let clicked = recording_handler(&mut engine);

    assert!(engine.pointer_down(11.0, 309.0));
    engine.pointer_move(60.0, 260.0).expect("drag");
    let released = engine.pointer_up(60.0, 260.0).expect("release");
    assert!(released.is_none());
    assert!(clicked.borrow().is_empty());
}

#[test]
fn click_before_any_dataset_is_ignored() {
    let mut engine = build_engine();
    let clicked = recording_handler(&mut engine);
    assert_eq!(click(&mut engine, 100.0, 100.0), None);
    assert!(clicked.borrow().is_empty());
}

#[test]
fn cleared_markers_cannot_be_clicked() {
    let mut engine = corner_engine();
    engine.clear();
    assert_eq!(click(&mut engine, 11.0, 309.0), None);
}

#[test]
fn marker_at_uses_plot_area_coordinates() {
    let engine = corner_engine();
    assert_eq!(engine.marker_at(1.0, 299.0).expect("marker at"), Some(0));
    assert_eq!(engine.marker_at(50.0, 50.0).expect("marker at"), None);
}
