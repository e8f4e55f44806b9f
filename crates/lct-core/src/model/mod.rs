//! Closed-form response models
//!
//! Each model is a pure function of its parameter set and a domain variable
//! (time or frequency). The samplers evaluate them on a [`Sweep`](crate::math::Sweep)
//! and the metric helpers derive the scalar summaries shown under each chart.

mod bode;
mod poles;
mod step;

pub use bode::{
    find_gain_crossover, magnitude_db, phase_deg, transfer, BodeResponse, BodeSample, LoopMargins,
};
pub use poles::{closed_loop_poles, PoleRegion, PoleSet};
pub use step::{
    overshoot_percent, second_order_step, settling_time, DampingClass, StepMetrics, StepResponse,
    StepSample,
};
