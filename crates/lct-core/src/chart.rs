//! Chart presets of the three demo widgets
//!
//! Viewport sizes, axis ranges and reference marks shared by every renderer.

use serde::{Deserialize, Serialize};

use crate::constants::{BODE_END_EXP, BODE_START_EXP};
use crate::projection::{Axis, Projector, Viewport};

pub const STEP_VIEWPORT: Viewport = Viewport::new(620.0, 300.0, 42.0);
pub const POLE_VIEWPORT: Viewport = Viewport::new(620.0, 320.0, 42.0);
pub const BODE_VIEWPORT: Viewport = Viewport::new(620.0, 220.0, 42.0);

/// Output range of the step-response chart
pub const STEP_Y_AXIS: Axis = Axis::linear(-0.2, 1.8);
/// Final value of a unit-step response, drawn as a dashed reference line
pub const STEP_TARGET: f64 = 1.0;

pub const POLE_REAL_AXIS: Axis = Axis::linear(-6.0, 1.0);
pub const POLE_IMAG_AXIS: Axis = Axis::linear(-4.0, 4.0);

pub const BODE_FREQ_AXIS: Axis = Axis::log10(BODE_START_EXP, BODE_END_EXP);
pub const BODE_MAG_AXIS: Axis = Axis::linear(-80.0, 30.0);
pub const BODE_PHASE_AXIS: Axis = Axis::linear(-200.0, 10.0);
/// Labelled frequency ticks (rad/s)
pub const BODE_TICKS: [f64; 4] = [0.1, 1.0, 10.0, 100.0];

/// Viewports of the three charts, overridable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSet {
    pub step: Viewport,
    pub pole: Viewport,
    pub bode: Viewport,
}

impl Default for ChartSet {
    fn default() -> Self {
        Self {
            step: STEP_VIEWPORT,
            pole: POLE_VIEWPORT,
            bode: BODE_VIEWPORT,
        }
    }
}

impl ChartSet {
    /// Time axis spans the current horizon
    pub fn step_projector(&self, horizon: f64) -> Projector {
        Projector::new(self.step, Axis::linear(0.0, horizon), STEP_Y_AXIS)
    }

    pub fn pole_projector(&self) -> Projector {
        Projector::new(self.pole, POLE_REAL_AXIS, POLE_IMAG_AXIS)
    }

    pub fn bode_magnitude_projector(&self) -> Projector {
        Projector::new(self.bode, BODE_FREQ_AXIS, BODE_MAG_AXIS)
    }

    pub fn bode_phase_projector(&self) -> Projector {
        Projector::new(self.bode, BODE_FREQ_AXIS, BODE_PHASE_AXIS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pole_origin_lines() {
        let p = ChartSet::default().pole_projector();
        // Real axis sits at mid-height because the imaginary range is symmetric
        assert_relative_eq!(p.py(0.0), 160.0, epsilon = 1e-9);
        assert_relative_eq!(p.px(0.0), 42.0 + 6.0 / 7.0 * 536.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bode_zero_db_line() {
        let p = ChartSet::default().bode_magnitude_projector();
        assert_relative_eq!(p.py(0.0), 178.0 - 80.0 / 110.0 * 136.0, epsilon = 1e-9);
    }
}
