//! Mathematical helpers
//!
//! Unit conversions and the sweeps the samplers evaluate models on.

pub mod conversions;
pub mod sweep;

pub use conversions::*;
pub use sweep::{Sweep, SweepType};
