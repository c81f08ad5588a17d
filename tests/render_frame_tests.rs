use std::time::Duration;

use approx::assert_abs_diff_eq;
use trend_chart::api::{ChartEngine, ChartEngineConfig, ChartStyle, MarkerVisibility};
use trend_chart::core::{Sample, Viewport};
use trend_chart::render::{
    Color, LinePrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

fn scenario_engine(style: ChartStyle) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(200, 100)).with_style(style);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_samples(vec![
            Sample::parse("2022-01-01T00:00:00Z", 1.0).expect("sample"),
            Sample::parse("2022-01-01T00:00:10Z", 2.0).expect("sample"),
            Sample::parse("2022-01-01T00:00:20Z", 1.5).expect("sample"),
        ])
        .expect("set samples");
    engine
}

#[test]
fn empty_chart_renders_nothing_without_error() {
    let config = ChartEngineConfig::new(Viewport::new(200, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.is_empty());

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_polyline_count, 0);
}

#[test]
fn unmeasured_chart_skips_render() {
    let config = ChartEngineConfig::new(Viewport::new(0, 0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.build_render_frame().is_none());
    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn idle_frame_has_series_but_no_highlight() {
    let mut engine = scenario_engine(ChartStyle::default());
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_polygon_count, 1);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn tracking_frame_highlights_active_guide_marker_and_tooltip() {
    let mut engine = scenario_engine(ChartStyle::default());
    engine.pointer_move(100.0, Duration::ZERO);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 1);
    let guide = frame.lines[0];
    assert_abs_diff_eq!(guide.x1, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(guide.y1, 20.0, epsilon = 1e-9);
    assert_eq!(guide.y2, 100.0);
    assert_eq!(guide.stroke_width, ChartStyle::default().guide_active_width);

    assert_eq!(frame.circles.len(), 1);
    assert_abs_diff_eq!(frame.circles[0].x, 100.0, epsilon = 1e-9);

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].x, 59.0);
    assert_eq!(frame.rects[0].width, 82.0);
    assert_eq!(frame.rects[0].height, 58.0);

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["2", "1.1 00:00"]);
    assert!(frame.texts.iter().all(|t| t.x == 100.0));

    engine.render().expect("render");
}

#[test]
fn inactive_guides_and_markers_follow_style() {
    let style = ChartStyle {
        guide_inactive_color: Some(Color::rgba(0.5, 0.5, 0.5, 0.2)),
        marker_visibility: MarkerVisibility::Always,
        ..ChartStyle::default()
    };
    let mut engine = scenario_engine(style);
    engine.pointer_move(0.0, Duration::ZERO);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 3);
    assert_eq!(frame.lines[0].stroke_width, style.guide_active_width);
    assert_eq!(frame.lines[1].stroke_width, style.guide_inactive_width);
    assert_eq!(frame.circles.len(), 3);
}

#[test]
fn hidden_markers_are_never_drawn() {
    let style = ChartStyle {
        marker_visibility: MarkerVisibility::Hidden,
        ..ChartStyle::default()
    };
    let mut engine = scenario_engine(style);
    engine.pointer_move(100.0, Duration::ZERO);

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.circles.is_empty());
}

#[test]
fn tooltip_disappears_after_pointer_out() {
    let mut engine = scenario_engine(ChartStyle::default());
    engine.pointer_move(100.0, Duration::ZERO);
    engine.pointer_out(Duration::from_millis(1));

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.rects.is_empty());
    assert!(frame.texts.is_empty());
    assert!(frame.lines.is_empty());
}

#[test]
fn null_renderer_rejects_invalid_geometry() {
    let frame = RenderFrame::new(Viewport::new(10, 10)).with_line(LinePrimitive::new(
        0.0,
        f64::NAN,
        1.0,
        1.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());

    let frame = RenderFrame::new(Viewport::new(10, 10)).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn invalid_style_is_rejected() {
    let style = ChartStyle {
        line_width: 0.0,
        ..ChartStyle::default()
    };
    let config = ChartEngineConfig::new(Viewport::new(200, 100)).with_style(style);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn series_primitives_carry_scene_geometry() {
    let engine = scenario_engine(ChartStyle::default());
    let scene = engine.scene().expect("scene");
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.polygons[0].vertices, scene.area.fill_polygon);
    assert_eq!(frame.polylines[0].vertices, scene.line.vertices);
    assert_eq!(frame.polylines[0].color, ChartStyle::default().line_color);
}
