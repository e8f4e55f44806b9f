//! Plain-text sample tables

use std::fmt::Write;

use super::summary::{bode_summary, pole_summary, step_summary};
use super::Renderer;
use crate::demo::{BodeFrame, PoleFrame, StepFrame};
use crate::format::{format_number, format_pole};

/// Renders frames as aligned text tables followed by the metric summary
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    /// Print every `stride`-th sample (the last sample is always printed)
    pub stride: usize,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self { stride: 20 }
    }
}

impl TableRenderer {
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
        }
    }

    fn keep(&self, index: usize, len: usize) -> bool {
        index % self.stride.max(1) == 0 || index + 1 == len
    }
}

impl Renderer for TableRenderer {
    type Output = String;

    fn step(&self, frame: &StepFrame) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>10}  {:>10}", "time (s)", "response");
        let len = frame.response.npoints();
        for (i, s) in frame.response.samples().enumerate() {
            if self.keep(i, len) {
                let _ = writeln!(
                    out,
                    "{:>10}  {:>10}",
                    format_number(s.time, 3),
                    format_number(s.response, 4)
                );
            }
        }
        let _ = writeln!(out, "{}", step_summary(frame));
        out
    }

    fn poles(&self, frame: &PoleFrame) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>6}  {:>18}", "pole", "location");
        for (i, p) in frame.poles.iter().enumerate() {
            let _ = writeln!(out, "{:>6}  {:>18}", i + 1, format_pole(*p));
        }
        for line in pole_summary(frame) {
            let _ = writeln!(out, "{line}");
        }
        out
    }

    fn bode(&self, frame: &BodeFrame) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>12}  {:>10}  {:>11}",
            "freq (rad/s)", "mag (dB)", "phase (deg)"
        );
        let len = frame.response.npoints();
        for (i, s) in frame.response.samples().enumerate() {
            if self.keep(i, len) {
                let _ = writeln!(
                    out,
                    "{:>12}  {:>10}  {:>11}",
                    format_number(s.freq, 3),
                    format_number(s.mag_db, 2),
                    format_number(s.phase_deg, 1)
                );
            }
        }
        let _ = writeln!(out, "{}", bode_summary(frame));
        out
    }
}
