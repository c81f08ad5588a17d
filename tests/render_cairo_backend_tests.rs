#![cfg(feature = "cairo-backend")]

use std::time::Duration;

use cairo::{Context, Format, ImageSurface};
use trend_chart::ChartError;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{Sample, Viewport};
use trend_chart::render::CairoRenderer;

fn samples() -> Vec<Sample> {
    vec![
        Sample::parse("2022-01-01T00:00:00Z", 1.0).expect("sample"),
        Sample::parse("2022-01-01T00:00:10Z", 2.0).expect("sample"),
        Sample::parse("2022-01-01T00:00:20Z", 1.5).expect("sample"),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_series_and_tooltip() {
    let renderer = CairoRenderer::new(200, 100).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(200, 100));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_samples(samples()).expect("set samples");
    engine.pointer_move(100.0, Duration::ZERO);

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.circles_drawn, 1);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.texts_drawn, 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(200, 100).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(200, 100));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_samples(samples()).expect("set samples");

    let surface = ImageSurface::create(Format::ARgb32, 200, 100).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.texts_drawn, 0);
}
