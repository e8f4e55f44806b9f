//! Closed-loop poles of the pole-movement plant
//!
//! G(s) = K/((s+1)(s+3)) under unity feedback has the characteristic
//! equation s² + 4s + (3+K) = 0. The roots are solved algebraically; the
//! real/complex branch switches exactly at K = 1.

use num_complex::Complex64;

use crate::constants::{GAIN_BOUNDARY_TOL, PLANT_POLES};
use crate::params::PoleGainParams;

/// The two closed-loop poles, always a real pair or a conjugate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleSet {
    poles: [Complex64; 2],
}

impl PoleSet {
    #[inline]
    pub fn first(&self) -> Complex64 {
        self.poles[0]
    }

    #[inline]
    pub fn second(&self) -> Complex64 {
        self.poles[1]
    }

    #[inline]
    pub fn as_array(&self) -> &[Complex64; 2] {
        &self.poles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Complex64> {
        self.poles.iter()
    }

    /// True when both poles lie on the real axis
    pub fn is_real(&self) -> bool {
        self.poles.iter().all(|p| p.im == 0.0)
    }

    /// Damped oscillation frequency |Im(p)| (0 for real poles)
    pub fn oscillation_frequency(&self) -> f64 {
        self.poles[0].im.abs()
    }

    /// True when both poles are in the open left half-plane
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.re < 0.0)
    }
}

/// Centre of the root locus and the gain at which the branches meet
///
/// For open-loop poles p1, p2 the closed-loop poles are
/// c ± √(((p1 − p2)/2)² − K) with c = (p1 + p2)/2.
fn locus_geometry() -> (f64, f64) {
    let [p1, p2] = PLANT_POLES;
    let center = (p1 + p2) / 2.0;
    let half_gap = (p1 - p2) / 2.0;
    (center, half_gap * half_gap)
}

/// Roots of s² + 4s + (3+K) = 0
///
/// K ≤ 1 gives −2 ± √(1−K) on the real axis, K > 1 gives −2 ± j√(K−1).
pub fn closed_loop_poles(gain: f64) -> PoleSet {
    let (center, boundary) = locus_geometry();
    let poles = if gain <= boundary {
        let root = (boundary - gain).sqrt();
        [
            Complex64::new(center + root, 0.0),
            Complex64::new(center - root, 0.0),
        ]
    } else {
        let imag = (gain - boundary).sqrt();
        [Complex64::new(center, imag), Complex64::new(center, -imag)]
    };
    PoleSet { poles }
}

/// Qualitative pole configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoleRegion {
    /// Two distinct real poles, K < 1
    DistinctReal,
    /// Repeated real pole, |K − 1| < 1e-6
    CriticalBoundary,
    /// Complex-conjugate pair, K > 1
    ComplexConjugate,
}

impl PoleRegion {
    pub fn classify(gain: f64) -> Self {
        let (_, boundary) = locus_geometry();
        if (gain - boundary).abs() < GAIN_BOUNDARY_TOL {
            PoleRegion::CriticalBoundary
        } else if gain < boundary {
            PoleRegion::DistinctReal
        } else {
            PoleRegion::ComplexConjugate
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PoleRegion::CriticalBoundary => "Critical boundary (repeated real pole).",
            PoleRegion::DistinctReal => "Two distinct real poles (non-oscillatory response).",
            PoleRegion::ComplexConjugate => "Complex-conjugate poles (damped oscillation).",
        }
    }
}

impl std::fmt::Display for PoleRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl PoleGainParams {
    #[inline]
    pub fn poles(&self) -> PoleSet {
        closed_loop_poles(self.gain)
    }

    #[inline]
    pub fn region(&self) -> PoleRegion {
        PoleRegion::classify(self.gain)
    }
}
