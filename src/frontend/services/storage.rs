//! Persistent key-value storage.
//!
//! Session keys written by the login flow live in a single JSON file under
//! the per-OS application support directory. Reads are synchronous and never
//! fail: a missing or unreadable file yields an empty store.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Name of the application data directory.
const APP_DIR: &str = "CEPS";

/// File the key-value store is persisted to.
const STORAGE_FILE: &str = "storage.json";

/// Get the base application data directory (`CEPS`).
fn app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Storage {
    values: HashMap<String, String>,
}

impl Storage {
    /// Gets the path to the storage file.
    pub fn storage_path() -> PathBuf {
        app_dir()
            .unwrap_or_else(|_| PathBuf::from(APP_DIR))
            .join(STORAGE_FILE)
    }

    /// Loads the store from disk. Absent or malformed contents degrade to an
    /// empty store rather than an error.
    pub fn load() -> Self {
        Self::load_from(&Self::storage_path())
    }

    fn load_from(path: &PathBuf) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    /// Parses a store from its JSON form, falling back to empty.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Saves the store to disk.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::storage_path()).await
    }

    async fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_degrades_to_empty() {
        let storage = Storage::from_json("not json at all");
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn set_get_remove() {
        let mut storage = Storage::default();
        storage.set("token", "abc123");
        assert_eq!(storage.get("token"), Some("abc123"));
        storage.remove("token");
        assert_eq!(storage.get("token"), None);
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "ceps-storage-test-{}.json",
            std::process::id()
        ));

        let mut storage = Storage::default();
        storage.set("token", "tok-1");
        storage.set("userRole", "faculty");
        storage.save_to(&path).await.unwrap();

        let loaded = Storage::load_from(&path);
        assert_eq!(loaded, storage);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_loads_empty() {
        let path = std::env::temp_dir().join("ceps-storage-test-missing.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Storage::load_from(&path), Storage::default());
    }
}
