//! Key-value preference storage.
//!
//! The page only ever persists one key (`theme`), but the store itself is a
//! plain string map so it behaves like the browser's origin-scoped storage.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Key under which the last explicitly chosen theme is stored.
pub const THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a flat JSON object on disk.
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

/// Open this user's preference store. Without a config directory the
/// choices only last for the session.
pub fn open_user_store() -> Box<dyn PreferenceStore> {
    match JsonPreferenceStore::default_path() {
        Some(path) => {
            tracing::debug!("Preferences at {}", path.display());
            Box::new(JsonPreferenceStore::open(path))
        }
        None => {
            tracing::warn!("No config directory found, theme choice will not be saved");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

impl JsonPreferenceStore {
    /// Open a store backed by `path`. A missing or unreadable file yields an
    /// empty store; the file is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read preferences from {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get preferences file path (cross-platform)
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("folio");
        path.push("preferences.json");
        Some(path)
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// In-memory store, used when there is no config directory and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::open(dir.path().join("prefs.json"));
        assert_eq!(store.get(THEME_KEY), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonPreferenceStore::open(&path);
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        let reopened = JsonPreferenceStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonPreferenceStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_format_is_flat_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = JsonPreferenceStore::open(&path);
        store.set(THEME_KEY, "dark").unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "theme": "dark" }));
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryPreferenceStore::with(THEME_KEY, "dark");
        assert_eq!(store.writes(), 0);
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.writes(), 1);
    }
}
