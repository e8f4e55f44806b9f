//! lct-core: response curves and charts for a linear control-theory course
//!
//! Closed-form models for a fixed family of first/second-order systems, the
//! samplers and metrics built on them, and the projection that turns samples
//! into plot coordinates.
//!
//! ## Modules
//!
//! - `model` - Step response, closed-loop poles and Bode response
//! - `math` - dB/degree conversions and sample sweeps
//! - `projection` - Mapping of samples onto a pixel viewport
//! - `chart` - Viewport and axis presets of the demo charts
//! - `demo` - Parameter state of the three demo widgets
//! - `render` - Renderers consuming demo frames (SVG, text table)
//! - `tracker` - Syllabus progress checklist and its storage

pub mod chart;
pub mod constants;
pub mod demo;
pub mod error;
pub mod format;
pub mod math;
pub mod model;
pub mod params;
pub mod projection;
pub mod render;
pub mod tracker;

pub use demo::{BodePlotDemo, PoleMovementDemo, StepResponseDemo};
pub use error::ParamError;
pub use params::{BodeParams, PoleGainParams, StepResponseParams};
