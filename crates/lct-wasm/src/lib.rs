//! WASM bindings for lct-core
//!
//! One JavaScript class per course-page widget. Each class owns its
//! parameters and the frame computed from them; setters recompute the frame
//! so getters within one paint read a consistent snapshot.

use wasm_bindgen::prelude::*;

mod bode;
mod poles;
mod step;
mod tracker;

pub use bode::WasmBodePlot;
pub use poles::WasmPoleMovement;
pub use step::WasmStepResponse;
pub use tracker::WasmSyllabusTracker;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
