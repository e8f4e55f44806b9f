//! Frequency response of the two-pole Bode model
//!
//! G(jω) = K / ((1 + jω/w1)(1 + jω/w2)), K = 10^(gain_db/20).
//!
//! The gain crossover is located by scanning the sampled magnitude for the
//! first sign change and interpolating linearly in frequency. Crossings
//! narrower than one sample interval are missed; that is the resolution of
//! the plotted curve and is kept as is.

use ndarray::Array1;
use num_complex::Complex64;

use crate::constants::{BODE_END_EXP, BODE_SAMPLE_COUNT, BODE_START_EXP};
use crate::math::{db_2_mag, mag_2_db, radian_2_degree, Sweep};
use crate::params::BodeParams;

/// Magnitude of G(jω) in dB
pub fn magnitude_db(freq: f64, gain_db: f64, w1: f64, w2: f64) -> f64 {
    let k = db_2_mag(gain_db);
    let m1 = 1.0 / (1.0 + (freq / w1).powi(2)).sqrt();
    let m2 = 1.0 / (1.0 + (freq / w2).powi(2)).sqrt();
    mag_2_db(k * m1 * m2)
}

/// Phase of G(jω) in degrees, in (−180, 0] for ω ≥ 0
pub fn phase_deg(freq: f64, w1: f64, w2: f64) -> f64 {
    -radian_2_degree((freq / w1).atan() + (freq / w2).atan())
}

/// G(jω) as a complex number
pub fn transfer(freq: f64, gain_db: f64, w1: f64, w2: f64) -> Complex64 {
    let k = Complex64::new(db_2_mag(gain_db), 0.0);
    let d1 = Complex64::new(1.0, freq / w1);
    let d2 = Complex64::new(1.0, freq / w2);
    k / (d1 * d2)
}

/// One point of a sampled Bode response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodeSample {
    pub freq: f64,
    pub mag_db: f64,
    pub phase_deg: f64,
}

/// Bode response sampled on a log-spaced frequency grid
#[derive(Debug, Clone)]
pub struct BodeResponse {
    /// Frequencies (rad/s), strictly increasing
    pub freq: Array1<f64>,
    /// Magnitude (dB) at each frequency
    pub mag_db: Array1<f64>,
    /// Phase (degrees) at each frequency
    pub phase_deg: Array1<f64>,
}

impl BodeResponse {
    #[inline]
    pub fn npoints(&self) -> usize {
        self.freq.len()
    }

    pub fn samples(&self) -> impl Iterator<Item = BodeSample> + '_ {
        self.freq
            .iter()
            .zip(self.mag_db.iter())
            .zip(self.phase_deg.iter())
            .map(|((&freq, &mag_db), &phase_deg)| BodeSample {
                freq,
                mag_db,
                phase_deg,
            })
    }

    /// First 0 dB crossing of the sampled magnitude, see [`find_gain_crossover`]
    pub fn gain_crossover(&self) -> Option<f64> {
        match (self.freq.as_slice(), self.mag_db.as_slice()) {
            (Some(freq), Some(mag_db)) => find_gain_crossover(freq, mag_db),
            _ => find_gain_crossover(&self.freq.to_vec(), &self.mag_db.to_vec()),
        }
    }
}

/// Locate the first 0 dB crossing of a sampled magnitude curve
///
/// Scans consecutive pairs for `(prev >= 0 && curr <= 0) || (prev <= 0 && curr >= 0)`
/// and interpolates linearly in frequency on the first bracketing pair:
/// `prev_f + (0 − prev_m)/(curr_m − prev_m) · (curr_f − prev_f)`.
/// Pairs with a non-finite magnitude are skipped. Returns `None` when no pair
/// brackets 0 dB.
pub fn find_gain_crossover(freq: &[f64], mag_db: &[f64]) -> Option<f64> {
    let n = freq.len().min(mag_db.len());
    for i in 1..n {
        let (prev_f, curr_f) = (freq[i - 1], freq[i]);
        let (prev_m, curr_m) = (mag_db[i - 1], mag_db[i]);
        if !prev_m.is_finite() || !curr_m.is_finite() {
            continue;
        }
        let brackets = (prev_m >= 0.0 && curr_m <= 0.0) || (prev_m <= 0.0 && curr_m >= 0.0);
        if !brackets {
            continue;
        }
        if curr_m == prev_m {
            // Both samples sit exactly on 0 dB.
            return Some(prev_f);
        }
        let ratio = (0.0 - prev_m) / (curr_m - prev_m);
        return Some(prev_f + ratio * (curr_f - prev_f));
    }
    None
}

/// Gain crossover and phase margin read off a Bode response
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopMargins {
    /// Gain crossover frequency (rad/s), absent if the plotted range has none
    pub crossover: Option<f64>,
    /// 180° + phase at the crossover, absent together with the crossover
    pub phase_margin: Option<f64>,
}

impl BodeParams {
    #[inline]
    pub fn magnitude_db(&self, freq: f64) -> f64 {
        magnitude_db(freq, self.gain_db, self.w1, self.w2)
    }

    #[inline]
    pub fn phase_deg(&self, freq: f64) -> f64 {
        phase_deg(freq, self.w1, self.w2)
    }

    #[inline]
    pub fn transfer(&self, freq: f64) -> Complex64 {
        transfer(freq, self.gain_db, self.w1, self.w2)
    }

    /// Sample 240 log-spaced frequencies over [10^-1, 10^2] rad/s
    pub fn bode_response(&self) -> BodeResponse {
        self.bode_response_on(&Sweep::log10(
            BODE_START_EXP,
            BODE_END_EXP,
            BODE_SAMPLE_COUNT,
        ))
    }

    /// Sample the response on an arbitrary frequency sweep
    pub fn bode_response_on(&self, sweep: &Sweep) -> BodeResponse {
        let freq = sweep.points().clone();
        let mag_db = freq.mapv(|w| self.magnitude_db(w));
        let phase_deg = freq.mapv(|w| self.phase_deg(w));
        BodeResponse {
            freq,
            mag_db,
            phase_deg,
        }
    }

    /// Crossover and phase margin of a response sampled from these parameters
    ///
    /// The margin uses the analytic phase at the interpolated crossover.
    pub fn margins(&self, response: &BodeResponse) -> LoopMargins {
        let crossover = response.gain_crossover();
        LoopMargins {
            crossover,
            phase_margin: crossover.map(|w| 180.0 + self.phase_deg(w)),
        }
    }
}
