//! Benchmarks for frame computation
//!
//! Each widget recomputes a full frame on every parameter change; these
//! measure that cost together with SVG rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lct_core::params::{BodeParams, StepResponseParams};
use lct_core::render::{Renderer, SvgRenderer};
use lct_core::{BodePlotDemo, PoleMovementDemo, StepResponseDemo};

fn bench_step_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_response");

    for zeta in [0.45, 1.0, 1.6].iter() {
        let params = StepResponseParams::new(*zeta, 2.2, 8.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(zeta), &params, |b, p| {
            b.iter(|| black_box(p).step_response())
        });
    }

    group.finish();
}

fn bench_bode_response(c: &mut Criterion) {
    let params = BodeParams::default();
    c.bench_function("bode_response_and_margins", |b| {
        b.iter(|| {
            let p = black_box(&params);
            let response = p.bode_response();
            p.margins(&response)
        })
    });
}

fn bench_svg_frames(c: &mut Criterion) {
    let renderer = SvgRenderer::default();
    let step = StepResponseDemo::new();
    let poles = PoleMovementDemo::new();
    let bode = BodePlotDemo::new();

    let mut group = c.benchmark_group("svg_frame");
    group.bench_function("step", |b| b.iter(|| renderer.step(&black_box(&step).frame())));
    group.bench_function("poles", |b| b.iter(|| renderer.poles(&black_box(&poles).frame())));
    group.bench_function("bode", |b| b.iter(|| renderer.bode(&black_box(&bode).frame())));
    group.finish();
}

criterion_group!(
    benches,
    bench_step_response,
    bench_bode_response,
    bench_svg_frames
);
criterion_main!(benches);
