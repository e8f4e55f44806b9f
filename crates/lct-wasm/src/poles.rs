//! WASM bindings for the pole-movement widget

use js_sys::Float64Array;
use lct_core::demo::PoleFrame;
use lct_core::format::format_pole;
use lct_core::render::{pole_summary, Renderer, SvgRenderer};
use lct_core::PoleMovementDemo;
use wasm_bindgen::prelude::*;

/// Pole-movement slider widget for WASM
#[wasm_bindgen]
pub struct WasmPoleMovement {
    demo: PoleMovementDemo,
    frame: PoleFrame,
}

#[wasm_bindgen]
impl WasmPoleMovement {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPoleMovement {
        let demo = PoleMovementDemo::new();
        let frame = demo.frame();
        WasmPoleMovement { demo, frame }
    }

    #[wasm_bindgen(getter)]
    pub fn gain(&self) -> f64 {
        self.demo.params().gain
    }

    #[wasm_bindgen(setter)]
    pub fn set_gain(&mut self, gain: f64) {
        self.demo.set_gain(gain);
        self.frame = self.demo.frame();
    }

    /// Real parts of both poles
    #[wasm_bindgen(getter)]
    pub fn real(&self) -> Float64Array {
        let re: Vec<f64> = self.frame.poles.iter().map(|p| p.re).collect();
        Float64Array::from(re.as_slice())
    }

    /// Imaginary parts of both poles
    #[wasm_bindgen(getter)]
    pub fn imag(&self) -> Float64Array {
        let im: Vec<f64> = self.frame.poles.iter().map(|p| p.im).collect();
        Float64Array::from(im.as_slice())
    }

    /// Pole `index` (0 or 1) as text, e.g. "-2.000 + j1.000"
    #[wasm_bindgen(js_name = poleText)]
    pub fn pole_text(&self, index: usize) -> Result<String, JsValue> {
        self.frame
            .poles
            .as_array()
            .get(index)
            .map(|p| format_pole(*p))
            .ok_or_else(|| JsValue::from_str(&format!("Invalid pole index: {}", index)))
    }

    /// Region description of the current gain
    #[wasm_bindgen(getter)]
    pub fn region(&self) -> String {
        self.frame.region.description().to_string()
    }

    #[wasm_bindgen(getter, js_name = oscillationFrequency)]
    pub fn oscillation_frequency(&self) -> f64 {
        self.frame.poles.oscillation_frequency()
    }

    pub fn svg(&self) -> String {
        SvgRenderer::default().poles(&self.frame)
    }

    /// Summary lines joined by newlines
    pub fn summary(&self) -> String {
        pole_summary(&self.frame).join("\n")
    }
}

impl Default for WasmPoleMovement {
    fn default() -> Self {
        Self::new()
    }
}
