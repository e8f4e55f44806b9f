//! WASM bindings for the Bode-plot widget

use js_sys::Float64Array;
use lct_core::demo::BodeFrame;
use lct_core::render::{bode_summary, Renderer, SvgRenderer};
use lct_core::BodePlotDemo;
use wasm_bindgen::prelude::*;

/// Bode-plot slider widget for WASM
#[wasm_bindgen]
pub struct WasmBodePlot {
    demo: BodePlotDemo,
    frame: BodeFrame,
}

#[wasm_bindgen]
impl WasmBodePlot {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmBodePlot {
        let demo = BodePlotDemo::new();
        let frame = demo.frame();
        WasmBodePlot { demo, frame }
    }

    #[wasm_bindgen(getter, js_name = gainDb)]
    pub fn gain_db(&self) -> f64 {
        self.demo.params().gain_db
    }

    #[wasm_bindgen(setter, js_name = gainDb)]
    pub fn set_gain_db(&mut self, gain_db: f64) {
        self.demo.set_gain_db(gain_db);
        self.refresh();
    }

    #[wasm_bindgen(getter)]
    pub fn w1(&self) -> f64 {
        self.demo.params().w1
    }

    #[wasm_bindgen(setter)]
    pub fn set_w1(&mut self, w1: f64) {
        self.demo.set_w1(w1);
        self.refresh();
    }

    #[wasm_bindgen(getter)]
    pub fn w2(&self) -> f64 {
        self.demo.params().w2
    }

    #[wasm_bindgen(setter)]
    pub fn set_w2(&mut self, w2: f64) {
        self.demo.set_w2(w2);
        self.refresh();
    }

    /// Sample frequencies (rad/s)
    #[wasm_bindgen(getter)]
    pub fn freq(&self) -> Float64Array {
        Float64Array::from(self.frame.response.freq.to_vec().as_slice())
    }

    #[wasm_bindgen(getter, js_name = magDb)]
    pub fn mag_db(&self) -> Float64Array {
        Float64Array::from(self.frame.response.mag_db.to_vec().as_slice())
    }

    #[wasm_bindgen(getter, js_name = phaseDeg)]
    pub fn phase_deg(&self) -> Float64Array {
        Float64Array::from(self.frame.response.phase_deg.to_vec().as_slice())
    }

    /// Gain crossover (rad/s), `undefined` when none is in the plotted range
    #[wasm_bindgen(getter)]
    pub fn crossover(&self) -> Option<f64> {
        self.frame.margins.crossover
    }

    /// Phase margin (deg), `undefined` without a crossover
    #[wasm_bindgen(getter, js_name = phaseMargin)]
    pub fn phase_margin(&self) -> Option<f64> {
        self.frame.margins.phase_margin
    }

    #[wasm_bindgen(js_name = magnitudeSvg)]
    pub fn magnitude_svg(&self) -> String {
        SvgRenderer::default().bode_magnitude(&self.frame)
    }

    #[wasm_bindgen(js_name = phaseSvg)]
    pub fn phase_svg(&self) -> String {
        SvgRenderer::default().bode_phase(&self.frame)
    }

    /// Both charts stacked in one document
    pub fn svg(&self) -> String {
        SvgRenderer::default().bode(&self.frame)
    }

    pub fn summary(&self) -> String {
        bode_summary(&self.frame)
    }
}

impl WasmBodePlot {
    fn refresh(&mut self) {
        self.frame = self.demo.frame();
    }
}

impl Default for WasmBodePlot {
    fn default() -> Self {
        Self::new()
    }
}
