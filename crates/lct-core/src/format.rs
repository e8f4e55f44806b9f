//! Text formatting of samples and metrics
//!
//! Everything the widgets print goes through here so that non-finite values
//! render as a placeholder and absent metrics as an explicit phrase.

use num_complex::Complex64;

use crate::projection::PlotPoint;

/// Placeholder printed in place of a non-finite number
pub const UNDEFINED: &str = "-";
/// Printed when the sampled magnitude never crosses 0 dB
pub const NO_CROSSOVER: &str = "none in plotted range";
/// Printed when the phase margin is undefined
pub const NO_MARGIN: &str = "N/A";

/// Fixed-point text with `digits` decimals, or `"-"` when not finite
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }
    // -0.0 prints as 0
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits, value)
}

/// `"-2.000 + j1.000"`
pub fn format_pole(pole: Complex64) -> String {
    let sign = if pole.im >= 0.0 { '+' } else { '-' };
    format!(
        "{} {} j{}",
        format_number(pole.re, 3),
        sign,
        format_number(pole.im.abs(), 3)
    )
}

pub fn format_crossover(crossover: Option<f64>) -> String {
    match crossover {
        Some(w) => format!("{} rad/s", format_number(w, 3)),
        None => NO_CROSSOVER.to_string(),
    }
}

pub fn format_phase_margin(margin: Option<f64>) -> String {
    match margin {
        Some(pm) => format!("{} deg", format_number(pm, 1)),
        None => NO_MARGIN.to_string(),
    }
}

/// SVG `points` attribute: `"x,y"` pairs at one decimal separated by spaces
pub fn polyline(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
