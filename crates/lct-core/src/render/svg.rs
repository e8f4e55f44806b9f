//! Direct SVG rendering of the demo charts
//!
//! Produces the same markup the course pages embed: padded axes, dashed
//! reference lines, one polyline per drawable curve segment and pole markers.

use std::fmt::Write;

use super::Renderer;
use crate::chart::{ChartSet, BODE_TICKS, STEP_TARGET};
use crate::demo::{BodeFrame, PoleFrame, StepFrame};
use crate::format::polyline;
use crate::projection::{Projector, Viewport};

const AXIS_STROKE: &str = "#9ca3af";
const REFERENCE_STROKE: &str = "#94a3b8";
const GRID_STROKE: &str = "#e5e7eb";
const LABEL_FILL: &str = "#334155";
const RESPONSE_STROKE: &str = "#0f766e";
const PHASE_STROKE: &str = "#b45309";
const POLE_FILL: &str = "#b91c1c";

/// Renders frames as standalone SVG documents
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer {
    pub charts: ChartSet,
}

impl SvgRenderer {
    pub fn new(charts: ChartSet) -> Self {
        Self { charts }
    }

    /// Magnitude chart of a Bode frame
    pub fn bode_magnitude(&self, frame: &BodeFrame) -> String {
        let projector = self.charts.bode_magnitude_projector();
        let mut body = String::new();
        axes(&mut body, &projector.viewport);
        let zero_db = projector.py(0.0);
        dashed_line(&mut body, &projector.viewport, zero_db);
        frequency_ticks(&mut body, &projector);
        curve(
            &mut body,
            &projector,
            frame.response.samples().map(|s| (s.freq, s.mag_db)),
            RESPONSE_STROKE,
        );
        document(&projector.viewport, &body)
    }

    /// Phase chart of a Bode frame
    pub fn bode_phase(&self, frame: &BodeFrame) -> String {
        let projector = self.charts.bode_phase_projector();
        let mut body = String::new();
        axes(&mut body, &projector.viewport);
        frequency_ticks(&mut body, &projector);
        curve(
            &mut body,
            &projector,
            frame.response.samples().map(|s| (s.freq, s.phase_deg)),
            PHASE_STROKE,
        );
        document(&projector.viewport, &body)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn step(&self, frame: &StepFrame) -> String {
        let projector = self.charts.step_projector(frame.params.horizon);
        let mut body = String::new();
        axes(&mut body, &projector.viewport);
        dashed_line(&mut body, &projector.viewport, projector.py(STEP_TARGET));
        curve(
            &mut body,
            &projector,
            frame.response.samples().map(|s| (s.time, s.response)),
            RESPONSE_STROKE,
        );
        document(&projector.viewport, &body)
    }

    fn poles(&self, frame: &PoleFrame) -> String {
        let projector = self.charts.pole_projector();
        let vp = projector.viewport;
        let mut body = String::new();

        let real_axis_y = projector.py(0.0);
        let imag_axis_x = projector.px(0.0);
        line(&mut body, [vp.left(), real_axis_y, vp.right(), real_axis_y], AXIS_STROKE, "");
        line(&mut body, [imag_axis_x, vp.top(), imag_axis_x, vp.bottom()], AXIS_STROKE, "");

        for pole in frame.poles.iter() {
            let Some(p) = projector.project(pole.re, pole.im) else {
                continue;
            };
            let _ = write!(
                body,
                r#"<g><circle cx="{}" cy="{}" r="6" fill="{POLE_FILL}"/>"#,
                p.x, p.y
            );
            let cross = r#" stroke-width="1.5""#;
            line(&mut body, [p.x - 8.0, p.y - 8.0, p.x + 8.0, p.y + 8.0], "#ffffff", cross);
            line(&mut body, [p.x + 8.0, p.y - 8.0, p.x - 8.0, p.y + 8.0], "#ffffff", cross);
            body.push_str("</g>");
        }
        document(&vp, &body)
    }

    /// Magnitude chart stacked above the phase chart in one document
    fn bode(&self, frame: &BodeFrame) -> String {
        let vp = self.charts.bode;
        let stacked = Viewport::new(vp.width, 2.0 * vp.height, vp.padding);
        let mut body = String::new();
        let _ = write!(body, "<g>{}</g>", self.bode_magnitude(frame));
        let _ = write!(
            body,
            r#"<g transform="translate(0,{})">{}</g>"#,
            vp.height,
            self.bode_phase(frame)
        );
        document(&stacked, &body)
    }
}

fn document(vp: &Viewport, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="background:#ffffff">{}</svg>"#,
        vp.width, vp.height, vp.width, vp.height, body
    )
}

/// `<line>` from `[x1, y1, x2, y2]`; `extra` is appended verbatim as attributes
fn line(out: &mut String, [x1, y1, x2, y2]: [f64; 4], stroke: &str, extra: &str) {
    let _ = write!(
        out,
        r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}"{extra}/>"#
    );
}

/// Bottom and left axis lines
fn axes(out: &mut String, vp: &Viewport) {
    line(out, [vp.left(), vp.bottom(), vp.right(), vp.bottom()], AXIS_STROKE, "");
    line(out, [vp.left(), vp.top(), vp.left(), vp.bottom()], AXIS_STROKE, "");
}

/// Horizontal dashed reference across the plot area
fn dashed_line(out: &mut String, vp: &Viewport, y: f64) {
    line(
        out,
        [vp.left(), y, vp.right(), y],
        REFERENCE_STROKE,
        r#" stroke-dasharray="6 4""#,
    );
}

fn frequency_ticks(out: &mut String, projector: &Projector) {
    let vp = projector.viewport;
    for tick in BODE_TICKS {
        let x = projector.px(tick);
        line(out, [x, vp.top(), x, vp.bottom()], GRID_STROKE, "");
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="11" fill="{LABEL_FILL}">{}</text>"#,
            x,
            vp.bottom() + 16.0,
            tick
        );
    }
}

/// One `<polyline>` per run of drawable samples
fn curve<I>(out: &mut String, projector: &Projector, samples: I, stroke: &str)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    for segment in projector.segments(samples) {
        let _ = write!(
            out,
            r#"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="2.5"/>"#,
            polyline(&segment)
        );
    }
}
