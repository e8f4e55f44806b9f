//! Metric lines printed under each chart

use crate::demo::{BodeFrame, PoleFrame, StepFrame};
use crate::format::{format_crossover, format_number, format_phase_margin, format_pole};

/// `Estimated overshoot: 20.5% | Estimated 2% settling time: 4.04 s`
pub fn step_summary(frame: &StepFrame) -> String {
    format!(
        "Estimated overshoot: {}% | Estimated 2% settling time: {} s",
        format_number(frame.metrics.overshoot_percent, 1),
        format_number(frame.metrics.settling_time, 2)
    )
}

/// Pole values, region text and oscillation frequency, one per line
pub fn pole_summary(frame: &PoleFrame) -> Vec<String> {
    vec![
        format!("Pole 1: {}", format_pole(frame.poles.first())),
        format!("Pole 2: {}", format_pole(frame.poles.second())),
        format!(
            "Region: {} Oscillation frequency grows with |Im(p)| = {} when poles are complex.",
            frame.region,
            format_number(frame.poles.oscillation_frequency(), 3)
        ),
    ]
}

/// `Gain crossover: 3.551 rad/s | Estimated phase margin: 89.0 deg`
pub fn bode_summary(frame: &BodeFrame) -> String {
    format!(
        "Gain crossover: {} | Estimated phase margin: {}",
        format_crossover(frame.margins.crossover),
        format_phase_margin(frame.margins.phase_margin)
    )
}
