//! WASM bindings for the syllabus tracker
//!
//! The host page owns local storage: it passes the stored record to the
//! constructor and writes `record()` back after each change.

use js_sys::Array;
use lct_core::tracker::{MemoryStore, SyllabusTracker, ITEMS, STORAGE_KEY};
use wasm_bindgen::prelude::*;

/// Syllabus progress checklist for WASM
#[wasm_bindgen]
pub struct WasmSyllabusTracker {
    inner: SyllabusTracker<MemoryStore>,
}

#[wasm_bindgen]
impl WasmSyllabusTracker {
    /// Hydrate from the raw local-storage record (`null` for none)
    ///
    /// A malformed record is ignored and every item starts unchecked.
    #[wasm_bindgen(constructor)]
    pub fn new(record: Option<String>) -> WasmSyllabusTracker {
        let store = match record {
            Some(raw) => MemoryStore::with_record(raw),
            None => MemoryStore::new(),
        };
        WasmSyllabusTracker {
            inner: SyllabusTracker::load(store),
        }
    }

    /// Local-storage key the record belongs under
    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key() -> String {
        STORAGE_KEY.to_string()
    }

    /// Item ids in syllabus order
    #[wasm_bindgen(getter)]
    pub fn ids(&self) -> Array {
        ITEMS.iter().map(|i| JsValue::from_str(i.id)).collect()
    }

    /// Record to persist, `undefined` until the first change
    pub fn record(&self) -> Option<String> {
        self.inner.store().record().map(str::to_string)
    }

    #[wasm_bindgen(js_name = isDone)]
    pub fn is_done(&self, id: &str) -> Option<bool> {
        self.inner.is_done(id)
    }

    pub fn toggle(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .toggle(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter, js_name = completedModules)]
    pub fn completed_modules(&self) -> usize {
        self.inner.progress().completed_modules
    }

    #[wasm_bindgen(getter, js_name = modulePercent)]
    pub fn module_percent(&self) -> u32 {
        self.inner.progress().module_percent
    }

    #[wasm_bindgen(getter, js_name = completedHours)]
    pub fn completed_hours(&self) -> u32 {
        self.inner.progress().completed_hours
    }

    #[wasm_bindgen(getter, js_name = totalHours)]
    pub fn total_hours(&self) -> u32 {
        self.inner.progress().total_hours
    }

    #[wasm_bindgen(getter, js_name = hourPercent)]
    pub fn hour_percent(&self) -> u32 {
        self.inner.progress().hour_percent
    }
}
