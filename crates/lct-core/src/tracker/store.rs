//! Storage backends for the completion map
//!
//! The map is persisted as a single JSON object record `{ "<id>": bool, ... }`.
//! Backends only move that record around; deciding what to do with a
//! missing or malformed record is left to the tracker.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Checklist id → completed flag
pub type CompletionMap = BTreeMap<String, bool>;

/// Storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed completion record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Completion record is not a JSON object")]
    NotAnObject,
}

/// A key-value backend holding the completion map
pub trait CompletionStore {
    /// Read the stored map; an absent record reads as an empty map
    fn read(&self) -> Result<CompletionMap, StoreError>;

    /// Replace the stored map
    fn write(&mut self, state: &CompletionMap) -> Result<(), StoreError>;
}

/// Parse a raw record, keeping only boolean entries
pub fn parse_record(raw: &str) -> Result<CompletionMap, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(entries) = value else {
        return Err(StoreError::NotAnObject);
    };
    Ok(entries
        .into_iter()
        .filter_map(|(id, v)| v.as_bool().map(|done| (id, done)))
        .collect())
}

/// Serialize a map into its record form
pub fn to_record(state: &CompletionMap) -> Result<String, StoreError> {
    Ok(serde_json::to_string(state)?)
}

/// In-memory record, the stand-in for browser local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing raw record
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }

    /// Current raw record, if any was written
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl CompletionStore for MemoryStore {
    fn read(&self) -> Result<CompletionMap, StoreError> {
        match &self.record {
            Some(raw) => parse_record(raw),
            None => Ok(CompletionMap::new()),
        }
    }

    fn write(&mut self, state: &CompletionMap) -> Result<(), StoreError> {
        self.record = Some(to_record(state)?);
        Ok(())
    }
}

/// Record kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletionStore for JsonFileStore {
    fn read(&self) -> Result<CompletionMap, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_record(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CompletionMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, state: &CompletionMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, to_record(state)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_keeps_booleans_only() {
        let map = parse_record(r#"{"3-1": true, "3-2": "yes", "lab": false, "3-3": 1}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("3-1"), Some(&true));
        assert_eq!(map.get("lab"), Some(&false));
    }

    #[test]
    fn test_parse_record_rejects_garbage() {
        assert!(matches!(parse_record("{not json"), Err(StoreError::Json(_))));
        assert!(matches!(parse_record("[true]"), Err(StoreError::NotAnObject)));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read().unwrap().is_empty());

        let mut state = CompletionMap::new();
        state.insert("3-4".to_string(), true);
        store.write(&state).unwrap();
        assert_eq!(store.record(), Some(r#"{"3-4":true}"#));
        assert_eq!(store.read().unwrap(), state);
    }
}
