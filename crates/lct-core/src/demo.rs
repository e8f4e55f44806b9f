//! Parameter state of the demo widgets
//!
//! A widget owns its parameters, clamps every update to its slider range and
//! recomputes a complete [`StepFrame`], [`PoleFrame`] or [`BodeFrame`] on each
//! call to `frame()`. Nothing is cached between frames.

use log::debug;

use crate::model::{BodeResponse, LoopMargins, PoleRegion, PoleSet, StepMetrics, StepResponse};
use crate::params::{
    BodeParams, PoleGainParams, StepResponseParams, GAIN_DB_RANGE, GAIN_RANGE, HORIZON_RANGE,
    W1_RANGE, W2_RANGE, WN_RANGE, ZETA_RANGE,
};

/// Everything a renderer needs to draw the step-response chart
#[derive(Debug, Clone)]
pub struct StepFrame {
    pub params: StepResponseParams,
    pub response: StepResponse,
    pub metrics: StepMetrics,
}

/// Everything a renderer needs to draw the pole map
#[derive(Debug, Clone, Copy)]
pub struct PoleFrame {
    pub params: PoleGainParams,
    pub poles: PoleSet,
    pub region: PoleRegion,
}

/// Everything a renderer needs to draw the Bode magnitude and phase charts
#[derive(Debug, Clone)]
pub struct BodeFrame {
    pub params: BodeParams,
    pub response: BodeResponse,
    pub margins: LoopMargins,
}

/// Step-response slider widget (ζ, ωn, time window)
#[derive(Debug, Clone, Default)]
pub struct StepResponseDemo {
    params: StepResponseParams,
}

impl StepResponseDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget with initial slider positions, each normalized to its range
    pub fn with_values(zeta: f64, wn: f64, horizon: f64) -> Self {
        let mut demo = Self::default();
        demo.set_zeta(zeta);
        demo.set_wn(wn);
        demo.set_horizon(horizon);
        demo
    }

    #[inline]
    pub fn params(&self) -> StepResponseParams {
        self.params
    }

    pub fn set_zeta(&mut self, zeta: f64) {
        self.params.zeta = ZETA_RANGE.normalize(zeta);
    }

    pub fn set_wn(&mut self, wn: f64) {
        self.params.wn = WN_RANGE.normalize(wn);
    }

    pub fn set_horizon(&mut self, horizon: f64) {
        self.params.horizon = HORIZON_RANGE.normalize(horizon);
    }

    pub fn frame(&self) -> StepFrame {
        let p = self.params;
        debug!(
            "step frame: zeta={} wn={} horizon={}",
            p.zeta, p.wn, p.horizon
        );
        StepFrame {
            params: p,
            response: p.step_response(),
            metrics: p.metrics(),
        }
    }
}

/// Pole-movement slider widget (loop gain K)
#[derive(Debug, Clone, Default)]
pub struct PoleMovementDemo {
    params: PoleGainParams,
}

impl PoleMovementDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gain(gain: f64) -> Self {
        let mut demo = Self::default();
        demo.set_gain(gain);
        demo
    }

    #[inline]
    pub fn params(&self) -> PoleGainParams {
        self.params
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.params.gain = GAIN_RANGE.normalize(gain);
    }

    pub fn frame(&self) -> PoleFrame {
        let p = self.params;
        debug!("pole frame: gain={}", p.gain);
        PoleFrame {
            params: p,
            poles: p.poles(),
            region: p.region(),
        }
    }
}

/// Bode-plot slider widget (gain in dB, two corner frequencies)
#[derive(Debug, Clone, Default)]
pub struct BodePlotDemo {
    params: BodeParams,
}

impl BodePlotDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(gain_db: f64, w1: f64, w2: f64) -> Self {
        let mut demo = Self::default();
        demo.set_gain_db(gain_db);
        demo.set_w1(w1);
        demo.set_w2(w2);
        demo
    }

    #[inline]
    pub fn params(&self) -> BodeParams {
        self.params
    }

    pub fn set_gain_db(&mut self, gain_db: f64) {
        self.params.gain_db = GAIN_DB_RANGE.normalize(gain_db);
    }

    pub fn set_w1(&mut self, w1: f64) {
        self.params.w1 = W1_RANGE.normalize(w1);
    }

    pub fn set_w2(&mut self, w2: f64) {
        self.params.w2 = W2_RANGE.normalize(w2);
    }

    pub fn frame(&self) -> BodeFrame {
        let p = self.params;
        debug!(
            "bode frame: gain_db={} w1={} w2={}",
            p.gain_db, p.w1, p.w2
        );
        let response = p.bode_response();
        let margins = p.margins(&response);
        BodeFrame {
            params: p,
            response,
            margins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_frame() {
        let frame = StepResponseDemo::new().frame();
        assert_eq!(frame.params.zeta, 0.45);
        assert_eq!(frame.response.npoints(), 261);
        assert_eq!(frame.response.t[260], 8.0);
    }

    #[test]
    fn test_setters_clamp_to_slider_range() {
        let mut demo = StepResponseDemo::new();
        demo.set_zeta(0.0);
        demo.set_wn(-4.0);
        assert_eq!(demo.params().zeta, 0.05);
        assert_eq!(demo.params().wn, 0.4);
        assert!(StepResponseParams::new(demo.params().zeta, demo.params().wn, 8.0).is_ok());

        let mut bode = BodePlotDemo::new();
        bode.set_w1(f64::NAN);
        assert_eq!(bode.params().w1, 1.0);
    }

    #[test]
    fn test_pole_frame_region() {
        let frame = PoleMovementDemo::with_gain(5.0).frame();
        assert_eq!(frame.region, PoleRegion::ComplexConjugate);
        assert!(!frame.poles.is_real());
    }

    #[test]
    fn test_frames_are_recomputed_identically() {
        let demo = BodePlotDemo::with_values(6.0, 0.5, 4.0);
        let a = demo.frame();
        let b = demo.frame();
        assert_eq!(a.response.mag_db, b.response.mag_db);
        assert_eq!(a.margins, b.margins);
    }
}
