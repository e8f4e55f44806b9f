//! Syllabus progress tracker
//!
//! A fixed checklist of course modules with a completion flag each. The
//! tracker hydrates from a [`CompletionStore`] once and writes the full map
//! back after every change. Both directions are best effort: a record that
//! cannot be read leaves every item unchecked, a failed write is logged and
//! the in-memory state is kept.

mod store;

use log::{debug, warn};
use thiserror::Error;

pub use store::{
    parse_record, to_record, CompletionMap, CompletionStore, JsonFileStore, MemoryStore,
    StoreError,
};

/// Key of the completion record in browser local storage
pub const STORAGE_KEY: &str = "lct_syllabus_tracker_v1";

/// One checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerItem {
    pub id: &'static str,
    pub title: &'static str,
    pub hours: u32,
}

const fn item(id: &'static str, title: &'static str, hours: u32) -> TrackerItem {
    TrackerItem { id, title, hours }
}

/// Course modules in syllabus order
pub const ITEMS: [TrackerItem; 14] = [
    item(
        "3-1",
        "Modeling, ODE, Transfer Function, Command & Disturbance Responses, Simulink",
        3,
    ),
    item(
        "3-2",
        "Steady-State Error, Closed-Loop Transfer Function, System Performance",
        3,
    ),
    item("3-3", "Bode Plot and Relative Stability", 3),
    item("3-4", "Frequency-Domain Controller Design", 3),
    item("3-5", "Routh Criterion and Nyquist Diagram", 3),
    item(
        "3-6",
        "Digital Controller Representation, Difference Equations",
        3,
    ),
    item("3-7", "Jury Test, Sampled-Data Control, Z-Transform", 3),
    item("3-8", "Sampling, ZOH, A/D and D/A Converters", 3),
    item(
        "3-9",
        "State-Transition Matrix, State-Space Representation",
        3,
    ),
    item("3-10", "Continuous-to-Discrete Conversion, DTSS", 3),
    item(
        "3-11",
        "Controllability, Observability, Ackermann's Formula",
        3,
    ),
    item("3-12", "Pole Placement and Full-State Observer Design", 3),
    item("3-13", "LQR and MPC", 3),
    item("lab", "Extra Lab: Inverted Pendulum Balancing", 2),
];

/// Tracker errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Unknown syllabus item: {0}")]
    UnknownItem(String),
}

/// Completed modules and hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed_modules: usize,
    pub total_modules: usize,
    pub module_percent: u32,
    pub completed_hours: u32,
    pub total_hours: u32,
    pub hour_percent: u32,
}

fn percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as u32
}

/// All items unchecked
pub fn default_state() -> CompletionMap {
    ITEMS.iter().map(|i| (i.id.to_string(), false)).collect()
}

/// Checklist state bound to a storage backend
#[derive(Debug)]
pub struct SyllabusTracker<S: CompletionStore> {
    state: CompletionMap,
    store: S,
}

impl<S: CompletionStore> SyllabusTracker<S> {
    /// Hydrate from `store`
    ///
    /// Only known ids are taken from the record. Unreadable records fall
    /// back to the default state.
    pub fn load(store: S) -> Self {
        let mut state = default_state();
        match store.read() {
            Ok(saved) => {
                for (id, done) in saved {
                    if let Some(slot) = state.get_mut(&id) {
                        *slot = done;
                    } else {
                        debug!("ignoring unknown syllabus item {id:?} in stored record");
                    }
                }
            }
            Err(e) => warn!("ignoring stored syllabus progress: {e}"),
        }
        Self { state, store }
    }

    pub fn state(&self) -> &CompletionMap {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn is_done(&self, id: &str) -> Option<bool> {
        self.state.get(id).copied()
    }

    /// Flip an item; returns its new value
    pub fn toggle(&mut self, id: &str) -> Result<bool, TrackerError> {
        let done = !self.slot(id)?;
        self.set(id, done)?;
        Ok(done)
    }

    pub fn set(&mut self, id: &str, done: bool) -> Result<(), TrackerError> {
        let slot = self
            .state
            .get_mut(id)
            .ok_or_else(|| TrackerError::UnknownItem(id.to_string()))?;
        *slot = done;
        self.persist();
        Ok(())
    }

    /// Uncheck every item
    pub fn reset(&mut self) {
        self.state = default_state();
        self.persist();
    }

    pub fn progress(&self) -> Progress {
        let completed: Vec<&TrackerItem> = ITEMS
            .iter()
            .filter(|i| self.state.get(i.id).copied().unwrap_or(false))
            .collect();
        let completed_modules = completed.len();
        let completed_hours: u32 = completed.iter().map(|i| i.hours).sum();
        let total_hours: u32 = ITEMS.iter().map(|i| i.hours).sum();
        Progress {
            completed_modules,
            total_modules: ITEMS.len(),
            module_percent: percent(completed_modules as f64, ITEMS.len() as f64),
            completed_hours,
            total_hours,
            hour_percent: percent(completed_hours as f64, total_hours as f64),
        }
    }

    fn slot(&self, id: &str) -> Result<bool, TrackerError> {
        self.is_done(id)
            .ok_or_else(|| TrackerError::UnknownItem(id.to_string()))
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.write(&self.state) {
            warn!("failed to save syllabus progress: {e}");
        }
    }
}
