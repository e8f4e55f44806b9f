//! Numerical constants for the response models
//!
//! Branch tolerances and sample counts shared by the models, samplers and
//! widgets.

/// Tolerance around ζ = 1 inside which the critically damped formula is used.
/// Keeps the underdamped and overdamped branches away from their 1/√(1−ζ²)
/// and 1/(s2−s1) singularities.
pub const CRITICAL_DAMPING_TOL: f64 = 1e-6;

/// Tolerance around K = 1 inside which the closed-loop poles are classified
/// as the critical (repeated pole) boundary.
pub const GAIN_BOUNDARY_TOL: f64 = 1e-6;

/// Number of intervals of the step-response sampler (points = intervals + 1).
pub const STEP_SAMPLE_INTERVALS: usize = 260;

/// Number of log-spaced points of the Bode sampler.
pub const BODE_SAMPLE_COUNT: usize = 240;

/// Lower decade of the Bode frequency window (10^-1 rad/s).
pub const BODE_START_EXP: f64 = -1.0;

/// Upper decade of the Bode frequency window (10^2 rad/s).
pub const BODE_END_EXP: f64 = 2.0;

/// Open-loop plant poles of the pole-movement demo, G(s) = K/((s+1)(s+3)).
pub const PLANT_POLES: [f64; 2] = [-1.0, -3.0];
