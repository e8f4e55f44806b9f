//! Chart-library rendering of the demo frames
//!
//! Same frames and presets as the direct SVG renderer, drawn through
//! `plotters` so the exported charts carry a labelled mesh.

use lct_core::chart::{
    ChartSet, BODE_FREQ_AXIS, BODE_MAG_AXIS, BODE_PHASE_AXIS, POLE_IMAG_AXIS, POLE_REAL_AXIS,
    STEP_TARGET, STEP_Y_AXIS,
};
use lct_core::demo::{BodeFrame, PoleFrame, StepFrame};
use lct_core::projection::{Axis, Viewport};
use lct_core::render::Renderer;
use plotters::coord::Shift;
use plotters::prelude::*;

const REFERENCE: RGBColor = RGBColor(0x94, 0xa3, 0xb8);
const RESPONSE: RGBColor = RGBColor(0x0f, 0x76, 0x6e);
const PHASE: RGBColor = RGBColor(0xb4, 0x53, 0x09);
const POLE: RGBColor = RGBColor(0xb9, 0x1c, 0x1c);

/// Renders frames to SVG strings through `plotters`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderer {
    pub charts: ChartSet,
}

impl ChartRenderer {
    pub fn new(charts: ChartSet) -> Self {
        Self { charts }
    }
}

impl Renderer for ChartRenderer {
    type Output = anyhow::Result<String>;

    fn step(&self, frame: &StepFrame) -> anyhow::Result<String> {
        let viewport = self.charts.step;
        let horizon = frame.params.horizon;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size(&viewport)).into_drawing_area();
            root.fill(&WHITE)?;
            let mut chart = ChartBuilder::on(&root)
                .caption("Step response", ("sans-serif", 16))
                .margin(8)
                .x_label_area_size(label_area(&viewport))
                .y_label_area_size(label_area(&viewport))
                .build_cartesian_2d(0.0..horizon, range(&STEP_Y_AXIS))?;
            chart
                .configure_mesh()
                .x_desc("time (s)")
                .y_desc("y(t)")
                .draw()?;
            chart.draw_series(LineSeries::new(
                [(0.0, STEP_TARGET), (horizon, STEP_TARGET)],
                REFERENCE.stroke_width(1),
            ))?;
            for run in finite_runs(frame.response.samples().map(|s| (s.time, s.response))) {
                chart.draw_series(LineSeries::new(run, RESPONSE.stroke_width(2)))?;
            }
            root.present()?;
        }
        Ok(svg)
    }

    fn poles(&self, frame: &PoleFrame) -> anyhow::Result<String> {
        let viewport = self.charts.pole;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size(&viewport)).into_drawing_area();
            root.fill(&WHITE)?;
            let mut chart = ChartBuilder::on(&root)
                .caption("Closed-loop poles", ("sans-serif", 16))
                .margin(8)
                .x_label_area_size(label_area(&viewport))
                .y_label_area_size(label_area(&viewport))
                .build_cartesian_2d(range(&POLE_REAL_AXIS), range(&POLE_IMAG_AXIS))?;
            chart
                .configure_mesh()
                .x_desc("Re(s)")
                .y_desc("Im(s)")
                .draw()?;
            chart.draw_series(LineSeries::new(
                [(POLE_REAL_AXIS.min, 0.0), (POLE_REAL_AXIS.max, 0.0)],
                REFERENCE.stroke_width(1),
            ))?;
            chart.draw_series(LineSeries::new(
                [(0.0, POLE_IMAG_AXIS.min), (0.0, POLE_IMAG_AXIS.max)],
                REFERENCE.stroke_width(1),
            ))?;
            chart.draw_series(
                frame
                    .poles
                    .iter()
                    .filter(|p| p.re.is_finite() && p.im.is_finite())
                    .map(|p| Cross::new((p.re, p.im), 6, POLE.stroke_width(2))),
            )?;
            root.present()?;
        }
        Ok(svg)
    }

    /// Magnitude above phase on one canvas
    fn bode(&self, frame: &BodeFrame) -> anyhow::Result<String> {
        let viewport = self.charts.bode;
        let (width, height) = size(&viewport);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, 2 * height)).into_drawing_area();
            root.fill(&WHITE)?;
            let (upper, lower) = root.split_vertically(height as i32);
            bode_panel(
                &upper,
                &viewport,
                &BODE_MAG_AXIS,
                "magnitude (dB)",
                Some(0.0),
                frame.response.samples().map(|s| (s.freq, s.mag_db)),
                RESPONSE,
            )?;
            bode_panel(
                &lower,
                &viewport,
                &BODE_PHASE_AXIS,
                "phase (deg)",
                None,
                frame.response.samples().map(|s| (s.freq, s.phase_deg)),
                PHASE,
            )?;
            root.present()?;
        }
        Ok(svg)
    }
}

fn bode_panel<I>(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    viewport: &Viewport,
    y_axis: &Axis,
    y_desc: &str,
    reference: Option<f64>,
    samples: I,
    color: RGBColor,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let f_min = 10f64.powf(BODE_FREQ_AXIS.min);
    let f_max = 10f64.powf(BODE_FREQ_AXIS.max);
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(label_area(viewport))
        .y_label_area_size(label_area(viewport))
        .build_cartesian_2d((f_min..f_max).log_scale(), range(y_axis))?;
    chart
        .configure_mesh()
        .x_desc("frequency (rad/s)")
        .y_desc(y_desc)
        .draw()?;
    if let Some(level) = reference {
        chart.draw_series(LineSeries::new(
            [(f_min, level), (f_max, level)],
            REFERENCE.stroke_width(1),
        ))?;
    }
    for run in finite_runs(samples) {
        chart.draw_series(LineSeries::new(run, color.stroke_width(2)))?;
    }
    Ok(())
}

fn size(viewport: &Viewport) -> (u32, u32) {
    (viewport.width.round() as u32, viewport.height.round() as u32)
}

fn label_area(viewport: &Viewport) -> u32 {
    viewport.padding.round() as u32
}

fn range(axis: &Axis) -> std::ops::Range<f64> {
    axis.min..axis.max
}

/// Split a curve into runs of finite samples
fn finite_runs<I>(samples: I) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in samples {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
