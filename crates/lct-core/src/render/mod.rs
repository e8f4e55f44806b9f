//! Renderers consuming demo frames
//!
//! Every renderer reads the same [`StepFrame`], [`PoleFrame`] and
//! [`BodeFrame`] values; none of them evaluates a model itself.

mod summary;
mod svg;
mod table;

use crate::demo::{BodeFrame, PoleFrame, StepFrame};

pub use summary::{bode_summary, pole_summary, step_summary};
pub use svg::SvgRenderer;
pub use table::TableRenderer;

/// A drawing backend for the three demo charts
pub trait Renderer {
    type Output;

    fn step(&self, frame: &StepFrame) -> Self::Output;

    fn poles(&self, frame: &PoleFrame) -> Self::Output;

    fn bode(&self, frame: &BodeFrame) -> Self::Output;
}
