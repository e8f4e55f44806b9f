//! Unit-step response of the canonical second-order system
//!
//! G(s) = ωn² / (s² + 2ζωn·s + ωn²), evaluated in closed form for the
//! underdamped, critically damped and overdamped cases.

use ndarray::Array1;
use std::f64::consts::PI;

use crate::constants::{CRITICAL_DAMPING_TOL, STEP_SAMPLE_INTERVALS};
use crate::math::Sweep;
use crate::params::StepResponseParams;

/// Damping regime selecting the closed-form branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingClass {
    /// ζ < 1: decaying oscillation
    Underdamped,
    /// |ζ − 1| < 1e-6: repeated real pole
    CriticallyDamped,
    /// ζ > 1: two distinct real poles
    Overdamped,
}

impl DampingClass {
    /// Classify a damping ratio
    ///
    /// The critical tolerance is checked first so that neither of the other
    /// branches is ever evaluated at its singularity.
    pub fn of(zeta: f64) -> Self {
        if (zeta - 1.0).abs() < CRITICAL_DAMPING_TOL {
            DampingClass::CriticallyDamped
        } else if zeta < 1.0 {
            DampingClass::Underdamped
        } else {
            DampingClass::Overdamped
        }
    }
}

/// Unit-step response y(t) of the canonical second-order system
pub fn second_order_step(t: f64, zeta: f64, wn: f64) -> f64 {
    match DampingClass::of(zeta) {
        DampingClass::Underdamped => {
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = wn * root;
            let phi = root.atan2(zeta);
            1.0 - ((-zeta * wn * t).exp() / root) * (wd * t + phi).sin()
        }
        DampingClass::CriticallyDamped => 1.0 - (-wn * t).exp() * (1.0 + wn * t),
        DampingClass::Overdamped => {
            let root = (zeta * zeta - 1.0).sqrt();
            let s1 = -wn * (zeta - root);
            let s2 = -wn * (zeta + root);
            1.0 - (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s2 - s1)
        }
    }
}

/// Peak overshoot in percent, e^(−πζ/√(1−ζ²))·100 for 0 < ζ < 1, else 0
pub fn overshoot_percent(zeta: f64) -> f64 {
    if zeta <= 0.0 || zeta >= 1.0 {
        return 0.0;
    }
    (-PI * zeta / (1.0 - zeta * zeta).sqrt()).exp() * 100.0
}

/// 2 % settling-time estimate 4/(ζωn)
///
/// Returns `f64::INFINITY` when ζ or ωn is not positive (never settles).
pub fn settling_time(zeta: f64, wn: f64) -> f64 {
    if zeta <= 0.0 || wn <= 0.0 {
        return f64::INFINITY;
    }
    4.0 / (zeta * wn)
}

/// One point of a sampled step response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSample {
    pub time: f64,
    pub response: f64,
}

/// Step response sampled over `[0, horizon]`
#[derive(Debug, Clone)]
pub struct StepResponse {
    /// Sample times (s), strictly increasing from 0 to the horizon
    pub t: Array1<f64>,
    /// Response at each sample time
    pub y: Array1<f64>,
}

impl StepResponse {
    #[inline]
    pub fn npoints(&self) -> usize {
        self.t.len()
    }

    pub fn samples(&self) -> impl Iterator<Item = StepSample> + '_ {
        self.t
            .iter()
            .zip(self.y.iter())
            .map(|(&time, &response)| StepSample { time, response })
    }

    /// Largest sampled response value and the time it occurs at
    pub fn peak(&self) -> Option<StepSample> {
        self.samples()
            .filter(|s| s.response.is_finite())
            .fold(None, |best: Option<StepSample>, s| match best {
                Some(b) if b.response >= s.response => Some(b),
                _ => Some(s),
            })
    }
}

/// Summary metrics shown under the step-response chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics {
    pub overshoot_percent: f64,
    /// Seconds, or `f64::INFINITY` when undefined
    pub settling_time: f64,
}

impl StepResponseParams {
    #[inline]
    pub fn damping_class(&self) -> DampingClass {
        DampingClass::of(self.zeta)
    }

    /// Response at time `t`
    #[inline]
    pub fn response_at(&self, t: f64) -> f64 {
        second_order_step(t, self.zeta, self.wn)
    }

    /// Sample the response at 261 evenly spaced points over `[0, horizon]`
    pub fn step_response(&self) -> StepResponse {
        self.step_response_with(STEP_SAMPLE_INTERVALS)
    }

    /// Sample the response at `intervals + 1` evenly spaced points
    pub fn step_response_with(&self, intervals: usize) -> StepResponse {
        let t = Sweep::linear(0.0, self.horizon, intervals).into_points();
        let y = t.mapv(|ti| self.response_at(ti));
        StepResponse { t, y }
    }

    pub fn metrics(&self) -> StepMetrics {
        StepMetrics {
            overshoot_percent: overshoot_percent(self.zeta),
            settling_time: settling_time(self.zeta, self.wn),
        }
    }
}
