#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use market_scatter::PlotError;
use market_scatter::api::{PlotEngine, PlotEngineConfig};
use market_scatter::core::{DataPoint, Margin};
use market_scatter::render::{CairoRenderer, Color};

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("BTC", 1.0, 10.0, 5.0, 0),
        DataPoint::new("ETH", 10.0, 100.0, -3.0, 0),
        DataPoint::new("SOL", 100.0, 1000.0, 0.0, 0),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_markers_path_and_axes() {
    let renderer = CairoRenderer::new(420, 320).expect("renderer");
    let config = PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::uniform(10.0));
    let mut engine = PlotEngine::new(renderer, config).expect("engine init");
    engine
        .render_load_result(market_scatter::core::LoadResult::Loaded(sample_points()))
        .expect("render load result");

    engine.render().expect("render");
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.paths_drawn, 1);
    assert!(stats.lines_drawn >= 2);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(420, 320).expect("renderer");
    let config = PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::uniform(10.0));
    let mut engine = PlotEngine::new(renderer, config).expect("engine init");
    engine.render_points(sample_points()).expect("render points");

    let surface = ImageSurface::create(Format::ARgb32, 420, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");
    assert_eq!(engine.renderer().last_stats().circles_drawn, 3);
}

#[test]
fn cairo_renderer_exports_png() {
    let mut renderer = CairoRenderer::new(420, 320).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.1, 0.1, 0.12))
        .expect("clear color");
    let config = PlotEngineConfig::new(400.0, 300.0).with_margin(Margin::uniform(10.0));
    let mut engine = PlotEngine::new(renderer, config).expect("engine init");
    engine.render_points(sample_points()).expect("render points");
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
