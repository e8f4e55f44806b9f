//! Model parameters and the slider ranges that bound them
//!
//! Each parameter set validates its invariants on construction. The widgets
//! never construct an invalid set: they push user input through
//! [`ParamRange::normalize`] first.

use serde::{Deserialize, Serialize};

use crate::error::{finite, non_negative, positive, ParamError};

/// Slider bounds of one user-adjustable parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Clamp into `[min, max]` and snap to the nearest step
    ///
    /// NaN maps to the default value.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Damping ratio slider
pub const ZETA_RANGE: ParamRange = ParamRange::new(0.05, 1.60, 0.01, 0.45);
/// Natural frequency slider (rad/s)
pub const WN_RANGE: ParamRange = ParamRange::new(0.40, 8.00, 0.05, 2.2);
/// Step-response time window slider (s)
pub const HORIZON_RANGE: ParamRange = ParamRange::new(3.0, 20.0, 0.5, 8.0);
/// Loop gain slider of the pole-movement demo
pub const GAIN_RANGE: ParamRange = ParamRange::new(0.0, 8.0, 0.05, 0.5);
/// Bode static gain slider (dB)
pub const GAIN_DB_RANGE: ParamRange = ParamRange::new(-20.0, 30.0, 0.5, 12.0);
/// First Bode corner frequency slider (rad/s)
pub const W1_RANGE: ParamRange = ParamRange::new(0.2, 15.0, 0.1, 1.0);
/// Second Bode corner frequency slider (rad/s)
pub const W2_RANGE: ParamRange = ParamRange::new(0.3, 20.0, 0.1, 8.0);

/// Parameters of the canonical second-order step response
/// ωn² / (s² + 2ζωn·s + ωn²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResponseParams {
    /// Damping ratio ζ
    pub zeta: f64,
    /// Natural frequency ωn (rad/s)
    pub wn: f64,
    /// Time window of the plot (s)
    pub horizon: f64,
}

impl StepResponseParams {
    pub fn new(zeta: f64, wn: f64, horizon: f64) -> Result<Self, ParamError> {
        Ok(Self {
            zeta: positive("zeta", zeta)?,
            wn: positive("wn", wn)?,
            horizon: positive("horizon", horizon)?,
        })
    }
}

impl Default for StepResponseParams {
    fn default() -> Self {
        Self {
            zeta: ZETA_RANGE.default,
            wn: WN_RANGE.default,
            horizon: HORIZON_RANGE.default,
        }
    }
}

/// Loop gain of the unity-feedback pole-movement plant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoleGainParams {
    pub gain: f64,
}

impl PoleGainParams {
    pub fn new(gain: f64) -> Result<Self, ParamError> {
        Ok(Self {
            gain: non_negative("gain", gain)?,
        })
    }
}

impl Default for PoleGainParams {
    fn default() -> Self {
        Self {
            gain: GAIN_RANGE.default,
        }
    }
}

/// Parameters of the two-pole Bode model K / ((1 + s/w1)(1 + s/w2))
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodeParams {
    /// Static gain in dB, K = 10^(gain_db/20)
    pub gain_db: f64,
    /// First corner frequency (rad/s)
    pub w1: f64,
    /// Second corner frequency (rad/s)
    pub w2: f64,
}

impl BodeParams {
    pub fn new(gain_db: f64, w1: f64, w2: f64) -> Result<Self, ParamError> {
        Ok(Self {
            gain_db: finite("gain_db", gain_db)?,
            w1: positive("w1", w1)?,
            w2: positive("w2", w2)?,
        })
    }
}

impl Default for BodeParams {
    fn default() -> Self {
        Self {
            gain_db: GAIN_DB_RANGE.default,
            w1: W1_RANGE.default,
            w2: W2_RANGE.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_clamps_to_bounds() {
        assert_eq!(ZETA_RANGE.normalize(-3.0), 0.05);
        assert_relative_eq!(ZETA_RANGE.normalize(10.0), 1.60, epsilon = 1e-12);
        assert_relative_eq!(GAIN_RANGE.normalize(f64::INFINITY), 8.0, epsilon = 1e-12);
        assert_eq!(WN_RANGE.normalize(f64::NAN), 2.2);
    }

    #[test]
    fn test_normalize_snaps_to_step() {
        assert_relative_eq!(HORIZON_RANGE.normalize(7.8), 8.0, epsilon = 1e-12);
        assert_relative_eq!(GAIN_RANGE.normalize(1.02), 1.0, epsilon = 1e-12);
        assert_relative_eq!(ZETA_RANGE.normalize(0.454), 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_defaults_lie_inside_ranges() {
        for range in [
            ZETA_RANGE,
            WN_RANGE,
            HORIZON_RANGE,
            GAIN_RANGE,
            GAIN_DB_RANGE,
            W1_RANGE,
            W2_RANGE,
        ] {
            assert!(range.contains(range.default));
        }
    }

    #[test]
    fn test_step_params_validation() {
        assert!(StepResponseParams::new(0.45, 2.2, 8.0).is_ok());
        assert_eq!(
            StepResponseParams::new(0.0, 2.2, 8.0),
            Err(ParamError::NotPositive {
                name: "zeta",
                value: 0.0
            })
        );
        assert!(matches!(
            StepResponseParams::new(0.5, f64::NAN, 8.0),
            Err(ParamError::NonFinite { name: "wn", .. })
        ));
    }

    #[test]
    fn test_pole_and_bode_params_validation() {
        assert!(PoleGainParams::new(0.0).is_ok());
        assert!(matches!(
            PoleGainParams::new(-0.1),
            Err(ParamError::Negative { name: "gain", .. })
        ));
        assert!(BodeParams::new(-20.0, 0.2, 0.3).is_ok());
        assert!(matches!(
            BodeParams::new(0.0, 1.0, 0.0),
            Err(ParamError::NotPositive { name: "w2", .. })
        ));
    }
}
