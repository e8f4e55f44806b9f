//! Bode Response Tests
//!
//! Magnitude / phase closed forms, the log-spaced sampler, gain-crossover
//! interpolation and the phase margin derived from it.

use approx::assert_relative_eq;
use lct_core::model::{find_gain_crossover, magnitude_db, phase_deg};
use lct_core::params::BodeParams;
use lct_core::BodePlotDemo;

// ============================================================================
// Closed Forms
// ============================================================================

#[test]
fn test_magnitude_unity_corners() {
    let expected = 20.0 * 0.5_f64.log10();
    assert_relative_eq!(magnitude_db(1.0, 0.0, 1.0, 1.0), expected, epsilon = 1e-12);
    assert_relative_eq!(expected, -6.0206, epsilon = 1e-4);
}

#[test]
fn test_low_frequency_asymptote() {
    // Far below both corners the magnitude approaches the static gain
    assert_relative_eq!(magnitude_db(1e-6, 12.0, 1.0, 8.0), 12.0, epsilon = 1e-9);
    assert_relative_eq!(phase_deg(1e-6, 1.0, 8.0), 0.0, epsilon = 1e-4);
}

#[test]
fn test_phase_stays_in_open_interval() {
    let response = BodeParams::new(0.0, 0.2, 0.3).unwrap().bode_response();
    for s in response.samples() {
        assert!(s.phase_deg <= 0.0 && s.phase_deg > -180.0);
    }
}

// ============================================================================
// Sampler
// ============================================================================

#[test]
fn test_sampler_spans_three_decades() {
    let response = BodeParams::default().bode_response();
    assert_eq!(response.npoints(), 240);
    assert_relative_eq!(response.freq[0], 0.1, epsilon = 1e-12);
    assert_relative_eq!(response.freq[239], 100.0, epsilon = 1e-9);
    let f = response.freq.to_vec();
    assert!(f.windows(2).all(|w| w[1] > w[0]));
}

// ============================================================================
// Gain Crossover
// ============================================================================

#[test]
fn test_crossover_hand_computed() {
    // Decreasing magnitude crossing 0 dB between 0.8 and 1.3 rad/s
    let freq = [0.2, 0.5, 0.8, 1.3, 2.0];
    let mag = [9.0, 4.5, 1.2, -0.8, -3.0];
    let expected = 0.8 + (0.0 - 1.2) / (-0.8 - 1.2) * (1.3 - 0.8);
    let wc = find_gain_crossover(&freq, &mag).unwrap();
    assert_relative_eq!(wc, expected, epsilon = 1e-6);
    assert_relative_eq!(wc, 1.1, epsilon = 1e-6);
}

#[test]
fn test_crossover_takes_first_bracketing_pair() {
    let freq = [1.0, 2.0, 3.0, 4.0, 5.0];
    let mag = [1.0, -1.0, 1.0, -1.0, 1.0];
    assert_relative_eq!(find_gain_crossover(&freq, &mag).unwrap(), 1.5, epsilon = 1e-12);
}

#[test]
fn test_no_crossover_in_range() {
    let freq = [1.0, 2.0, 3.0];
    let mag = [-1.0, -2.0, -3.0];
    assert_eq!(find_gain_crossover(&freq, &mag), None);
    assert_eq!(find_gain_crossover(&[], &[]), None);
}

#[test]
fn test_crossover_narrower_than_sampling_is_missed() {
    // A dip below 0 dB between two samples is invisible to the scan
    let freq = [1.0, 2.0, 3.0];
    let mag = [1.0, 0.5, 2.0];
    assert_eq!(find_gain_crossover(&freq, &mag), None);
}

// ============================================================================
// Phase Margin
// ============================================================================

#[test]
fn test_phase_margin_default_widget() {
    let frame = BodePlotDemo::new().frame();
    let wc = frame.margins.crossover.unwrap();
    let pm = frame.margins.phase_margin.unwrap();
    assert_relative_eq!(pm, 180.0 + phase_deg(wc, 1.0, 8.0), epsilon = 1e-12);
    assert!(pm > 0.0 && pm < 180.0);
}

#[test]
fn test_margin_absent_without_crossover() {
    let frame = BodePlotDemo::with_values(-20.0, 15.0, 20.0).frame();
    assert!(frame.margins.crossover.is_none());
    assert!(frame.margins.phase_margin.is_none());
}

#[test]
fn test_margin_absent_is_not_zero() {
    let frame = BodePlotDemo::with_values(-20.0, 1.0, 8.0).frame();
    assert_ne!(frame.margins.phase_margin, Some(0.0));
}
