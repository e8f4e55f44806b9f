//! Closed-Loop Pole Tests
//!
//! Roots of s² + 4s + (3+K) = 0 around the K = 1 branch boundary.

use approx::assert_relative_eq;
use lct_core::model::{closed_loop_poles, PoleRegion};
use lct_core::params::PoleGainParams;
use lct_core::PoleMovementDemo;
use num_complex::Complex64;

// ============================================================================
// Reference Gains
// ============================================================================

#[test]
fn test_gain_zero() {
    let poles = closed_loop_poles(0.0);
    assert_eq!(poles.first(), Complex64::new(-1.0, 0.0));
    assert_eq!(poles.second(), Complex64::new(-3.0, 0.0));
    assert_eq!(PoleRegion::classify(0.0), PoleRegion::DistinctReal);
}

#[test]
fn test_gain_one_repeated_pole() {
    let poles = closed_loop_poles(1.0);
    assert_eq!(poles.first(), poles.second());
    assert_eq!(poles.first(), Complex64::new(-2.0, 0.0));
    assert_eq!(PoleRegion::classify(1.0), PoleRegion::CriticalBoundary);
}

#[test]
fn test_gain_five() {
    let poles = closed_loop_poles(5.0);
    assert_relative_eq!(poles.first().re, -2.0, epsilon = 1e-12);
    assert_relative_eq!(poles.first().im, 2.0, epsilon = 1e-12);
    assert_relative_eq!(poles.second().im, -2.0, epsilon = 1e-12);
    assert_eq!(PoleRegion::classify(5.0), PoleRegion::ComplexConjugate);
}

// ============================================================================
// Locus Shape
// ============================================================================

#[test]
fn test_real_part_fixed_once_complex() {
    for k in [1.5, 2.0, 4.0, 8.0] {
        let poles = PoleGainParams::new(k).unwrap().poles();
        assert_eq!(poles.first().re, -2.0);
        assert_eq!(poles.second().re, -2.0);
        assert_relative_eq!(poles.oscillation_frequency(), (k - 1.0_f64).sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_real_poles_approach_each_other() {
    let mut last_gap = f64::INFINITY;
    for k in [0.0, 0.25, 0.5, 0.75, 0.95] {
        let poles = closed_loop_poles(k);
        let gap = poles.first().re - poles.second().re;
        assert!(gap < last_gap);
        last_gap = gap;
    }
}

#[test]
fn test_widget_slider_range() {
    let demo = PoleMovementDemo::with_gain(12.0);
    assert_relative_eq!(demo.params().gain, 8.0, epsilon = 1e-12);
    let frame = demo.frame();
    assert!(frame.poles.is_stable());
    assert_eq!(frame.region, PoleRegion::ComplexConjugate);
}
