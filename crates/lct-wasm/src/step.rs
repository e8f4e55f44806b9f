//! WASM bindings for the step-response widget

use js_sys::Float64Array;
use lct_core::demo::StepFrame;
use lct_core::format::polyline;
use lct_core::render::{step_summary, Renderer, SvgRenderer};
use lct_core::StepResponseDemo;
use wasm_bindgen::prelude::*;

/// Step-response slider widget for WASM
#[wasm_bindgen]
pub struct WasmStepResponse {
    demo: StepResponseDemo,
    frame: StepFrame,
}

#[wasm_bindgen]
impl WasmStepResponse {
    /// Create the widget at its default slider positions
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmStepResponse {
        let demo = StepResponseDemo::new();
        let frame = demo.frame();
        WasmStepResponse { demo, frame }
    }

    #[wasm_bindgen(getter)]
    pub fn zeta(&self) -> f64 {
        self.demo.params().zeta
    }

    #[wasm_bindgen(setter)]
    pub fn set_zeta(&mut self, zeta: f64) {
        self.demo.set_zeta(zeta);
        self.refresh();
    }

    #[wasm_bindgen(getter)]
    pub fn wn(&self) -> f64 {
        self.demo.params().wn
    }

    #[wasm_bindgen(setter)]
    pub fn set_wn(&mut self, wn: f64) {
        self.demo.set_wn(wn);
        self.refresh();
    }

    #[wasm_bindgen(getter)]
    pub fn horizon(&self) -> f64 {
        self.demo.params().horizon
    }

    #[wasm_bindgen(setter)]
    pub fn set_horizon(&mut self, horizon: f64) {
        self.demo.set_horizon(horizon);
        self.refresh();
    }

    /// Sample times (s)
    #[wasm_bindgen(getter)]
    pub fn t(&self) -> Float64Array {
        Float64Array::from(self.frame.response.t.to_vec().as_slice())
    }

    /// Response at each sample time
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Float64Array {
        Float64Array::from(self.frame.response.y.to_vec().as_slice())
    }

    #[wasm_bindgen(getter, js_name = overshootPercent)]
    pub fn overshoot_percent(&self) -> f64 {
        self.frame.metrics.overshoot_percent
    }

    /// Settling time (s), `undefined` when the response never settles
    #[wasm_bindgen(getter, js_name = settlingTime)]
    pub fn settling_time(&self) -> Option<f64> {
        Some(self.frame.metrics.settling_time).filter(|t| t.is_finite())
    }

    /// SVG `points` attribute of the response curve
    pub fn polyline(&self) -> String {
        let projector = SvgRenderer::default()
            .charts
            .step_projector(self.frame.params.horizon);
        projector
            .segments(self.frame.response.samples().map(|s| (s.time, s.response)))
            .iter()
            .map(|segment| polyline(segment))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn svg(&self) -> String {
        SvgRenderer::default().step(&self.frame)
    }

    pub fn summary(&self) -> String {
        step_summary(&self.frame)
    }
}

impl WasmStepResponse {
    fn refresh(&mut self) {
        self.frame = self.demo.frame();
    }
}

impl Default for WasmStepResponse {
    fn default() -> Self {
        Self::new()
    }
}
