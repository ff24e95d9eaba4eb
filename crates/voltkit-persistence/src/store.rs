//! ---
//! vk_section: "02-persistence"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Local storage abstractions for history and preferences."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::Result;

/// String-keyed storage with JSON string values, mirroring the two
/// independently keyed entries the calculator keeps (theme, history).
///
/// A missing key reads as `None`, never an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
    /// Delete the entry stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Durable store keeping one `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory when absent.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) => {
                // Degraded read: treat as empty state rather than failing.
                warn!(key, error = %err, "storage read failed, falling back to empty state");
                None
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store used by tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("theme"), None);
        store.put("theme", "\"dark\"").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("\"dark\""));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn file_store_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.put("theme", "\"light\"").unwrap();
        store.put("history", "[]").unwrap();
        store.remove("theme").unwrap();
        assert_eq!(store.get("history").as_deref(), Some("[]"));
    }

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        store.put("history", "[]").unwrap();
        assert_eq!(store.get("history").as_deref(), Some("[]"));
        store.remove("history").unwrap();
        assert_eq!(store.get("history"), None);
    }
}
