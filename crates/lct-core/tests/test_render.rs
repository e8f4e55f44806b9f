//! Renderer Tests
//!
//! Both core renderers consume the same frames; curves never carry
//! non-finite coordinates.

use lct_core::chart::ChartSet;
use lct_core::demo::StepFrame;
use lct_core::model::StepMetrics;
use lct_core::params::StepResponseParams;
use lct_core::render::{Renderer, SvgRenderer, TableRenderer};
use lct_core::{BodePlotDemo, PoleMovementDemo, StepResponseDemo};
use ndarray::Array1;

/// Frame with a hole in the middle of the curve
fn frame_with_gap() -> StepFrame {
    let params = StepResponseParams::new(0.5, 1.0, 4.0).unwrap();
    let mut response = params.step_response_with(4);
    response.y[2] = f64::NAN;
    StepFrame {
        params,
        response,
        metrics: StepMetrics {
            overshoot_percent: f64::NAN,
            settling_time: f64::INFINITY,
        },
    }
}

#[test]
fn test_gap_splits_svg_polyline() {
    let svg = SvgRenderer::default().step(&frame_with_gap());
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}

#[test]
fn test_gap_prints_placeholder() {
    let table = TableRenderer::new(1).step(&frame_with_gap());
    assert!(table.contains("Estimated overshoot: -% | Estimated 2% settling time: - s"));
    let rows: Vec<&str> = table.lines().collect();
    assert!(rows[3].trim_end().ends_with('-'));
}

#[test]
fn test_custom_viewport() {
    let mut charts = ChartSet::default();
    charts.step.width = 1000.0;
    let svg = SvgRenderer::new(charts).step(&StepResponseDemo::new().frame());
    assert!(svg.contains(r#"viewBox="0 0 1000 300""#));
}

#[test]
fn test_renderers_share_frames() {
    let step = StepResponseDemo::new().frame();
    let poles = PoleMovementDemo::new().frame();
    let bode = BodePlotDemo::new().frame();

    let svg = SvgRenderer::default();
    let table = TableRenderer::default();
    for out in [svg.step(&step), svg.poles(&poles), svg.bode(&bode)] {
        assert!(out.starts_with("<svg"));
    }
    for out in [table.step(&step), table.poles(&poles), table.bode(&bode)] {
        assert!(!out.is_empty());
    }
}

#[test]
fn test_projection_of_manual_samples() {
    let charts = ChartSet::default();
    let projector = charts.step_projector(8.0);
    let t = Array1::linspace(0.0, 8.0, 5);
    let segments = projector.segments(t.iter().map(|&x| (x, 1.0)));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].first().unwrap().x, 42.0);
    assert_eq!(segments[0].last().unwrap().x, 578.0);
}
