use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{
    DegenerateFallback, LinearScale, Sample, SceneOptions, Viewport, build_scene,
};
use trend_chart::interaction::resolve_index;
use trend_chart::render::NullRenderer;

fn generated_samples(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let time = Utc
                .timestamp_opt(1_640_995_200 + i as i64 * 60, 0)
                .single()
                .expect("valid timestamp");
            let value = 100.0 + (i as f64 * 0.05).sin() * 10.0;
            Sample::new(time, value).expect("valid generated sample")
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1920.0), DegenerateFallback::RangeStart)
        .expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_scene_build_10k(c: &mut Criterion) {
    let samples = generated_samples(10_000);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("scene_build_10k", |b| {
        b.iter(|| {
            let _ = build_scene(black_box(&samples), viewport, SceneOptions::default())
                .expect("scene");
        })
    });
}

fn bench_resolve_index(c: &mut Criterion) {
    c.bench_function("resolve_index_sweep", |b| {
        b.iter(|| {
            for x in 0..1920 {
                let _ = resolve_index(black_box(f64::from(x)), 1920.0, 10_000);
            }
        })
    });
}

fn bench_engine_pointer_and_render(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_samples(generated_samples(2_000))
        .expect("set samples");
    let mut now = Duration::ZERO;

    c.bench_function("engine_pointer_move_and_render_2k", |b| {
        b.iter(|| {
            now += Duration::from_millis(10);
            let _ = engine.pointer_move(black_box(960.0), now);
            engine.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_scene_build_10k,
    bench_resolve_index,
    bench_engine_pointer_and_render
);
criterion_main!(benches);
