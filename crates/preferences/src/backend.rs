//! Storage media for the preference store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{PreferenceError, PreferenceResult};
use crate::value::PreferenceValue;

/// Flat key/value document as loaded from or written to a backend
pub type PreferenceMap = HashMap<String, PreferenceValue>;

/// External storage medium behind a [`crate::PreferenceStore`].
pub trait PreferenceBackend: Send + Sync {
    /// Load every stored value. A medium with nothing stored yet returns an
    /// empty map.
    fn load(&self) -> PreferenceResult<PreferenceMap>;

    /// Durably replace the stored document with `values`
    fn persist(&self, values: &PreferenceMap) -> PreferenceResult<()>;
}

/// JSON document on disk, one object of `key -> value`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/citadel-browser/preferences.json`, creating the directory
    /// if needed
    pub fn default_location() -> PreferenceResult<Self> {
        let settings_dir = dirs::config_dir()
            .ok_or(PreferenceError::ConfigDirNotFound)?
            .join("citadel-browser");

        std::fs::create_dir_all(&settings_dir)?;

        Ok(Self::new(settings_dir.join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceBackend for JsonFileBackend {
    fn load(&self) -> PreferenceResult<PreferenceMap> {
        if !self.path.exists() {
            log::debug!("No preferences at {}, starting empty", self.path.display());
            return Ok(PreferenceMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let values: PreferenceMap = serde_json::from_str(&content)?;
        log::debug!("Loaded {} preferences from {}", values.len(), self.path.display());
        Ok(values)
    }

    fn persist(&self, values: &PreferenceMap) -> PreferenceResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory medium for tests and ephemeral profiles.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<PreferenceMap>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already populated document
    pub fn with_values(values: PreferenceMap) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }

    /// Copy of what has been persisted so far
    pub fn snapshot(&self) -> PreferenceMap {
        self.values.lock().clone()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self) -> PreferenceResult<PreferenceMap> {
        Ok(self.values.lock().clone())
    }

    fn persist(&self, values: &PreferenceMap) -> PreferenceResult<()> {
        *self.values.lock() = values.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("missing.json"));
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("nested").join("prefs.json"));

        let mut values = PreferenceMap::new();
        values.insert("proxy_host".into(), PreferenceValue::from("10.0.0.1"));
        values.insert("proxy_port".into(), PreferenceValue::from(8080));
        backend.persist(&values).unwrap();

        assert_eq!(backend.load().unwrap(), values);
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileBackend::new(&path).load().unwrap_err();
        assert!(matches!(err, PreferenceError::Serialization(_)));
        assert!(!err.is_storage_related());
    }
}
