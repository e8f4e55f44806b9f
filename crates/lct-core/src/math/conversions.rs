//! Unit conversion functions
//!
//! Conversions between linear magnitude, dB and angle units used by the Bode
//! model.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert magnitude to dB (20*log10(mag))
#[inline]
pub fn mag_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to magnitude (10^(dB/20))
#[inline]
pub fn db_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert radians to degrees
#[inline]
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    mag_2_db(z.norm())
}

/// Convert complex number to phase in degrees
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}
