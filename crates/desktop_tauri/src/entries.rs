//! Typed Tauri command handlers backing the table sync remote commands.
//!
//! Edited entries and saved files live in two scoped JSON map files under the app data
//! directory: `entries/entries.json` and `files/files.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use platform_host::{DropdownOption, EntryPayload};
use tauri::Manager;

type EntryMap = BTreeMap<String, String>;

/// Confirmation returned by [`save_file`].
pub const FILE_SAVED_MESSAGE: &str = "File saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named store scopes under the app data directory.
pub enum StoreScope {
    /// Entries written by table commits.
    Entries,
    /// Files written by `save_file`.
    Files,
}

impl StoreScope {
    const fn dir_name(self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Files => "files",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::Entries => "entries.json",
            Self::Files => "files.json",
        }
    }
}

fn load_entry_map(path: &Path) -> Result<EntryMap, String> {
    if !path.exists() {
        return Ok(EntryMap::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(EntryMap::new());
    }
    serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse entry map {}: {err}", path.display()))
}

fn save_entry_map(path: &Path, map: &EntryMap) -> Result<(), String> {
    let serialized = serde_json::to_string(map)
        .map_err(|err| format!("failed to serialize entry map: {err}"))?;
    fs::write(path, serialized).map_err(|err| format!("failed to write {}: {err}", path.display()))
}

fn validate_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        Err("Entry key must not be empty".to_string())
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Key/value entry storage backed by a single JSON map file.
pub struct ScopedEntryStore {
    file: PathBuf,
}

impl ScopedEntryStore {
    /// Creates a store for `scope` rooted at `root`.
    pub fn from_root(root: impl AsRef<Path>, scope: StoreScope) -> Result<Self, String> {
        let dir = root.as_ref().join(scope.dir_name());
        fs::create_dir_all(&dir)
            .map_err(|err| format!("failed to create store dir {}: {err}", dir.display()))?;
        Ok(Self {
            file: dir.join(scope.file_name()),
        })
    }

    fn from_app(app: &tauri::AppHandle, scope: StoreScope) -> Result<Self, String> {
        let root = app
            .path()
            .app_data_dir()
            .map_err(|err| format!("failed to resolve app data dir: {err}"))?;
        Self::from_root(root, scope)
    }

    /// Returns the backing map file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Loads an entry value by key.
    pub fn load(&self, key: &str) -> Result<Option<String>, String> {
        validate_key(key)?;
        let map = load_entry_map(&self.file)?;
        Ok(map.get(key).cloned())
    }

    /// Inserts or replaces an entry.
    pub fn save(&self, key: &str, value: &str) -> Result<(), String> {
        validate_key(key)?;
        let mut map = load_entry_map(&self.file)?;
        map.insert(key.to_string(), value.to_string());
        save_entry_map(&self.file, &map)
    }

    /// Returns every stored entry in key order.
    pub fn entries(&self) -> Result<Vec<(String, String)>, String> {
        Ok(load_entry_map(&self.file)?.into_iter().collect())
    }
}

/// Persists one edited entry and returns the stored value.
pub fn apply_updated_entry(
    store: &ScopedEntryStore,
    payload: &EntryPayload,
) -> Result<String, String> {
    store.save(&payload.key, &payload.value)?;
    Ok(payload.value.clone())
}

/// Persists one file payload and returns the confirmation message.
pub fn apply_save_file(
    store: &ScopedEntryStore,
    payload: &EntryPayload,
) -> Result<String, String> {
    store.save(&payload.key, &payload.value)?;
    Ok(FILE_SAVED_MESSAGE.to_string())
}

/// Returns the static backend option list.
pub fn dropdown_options() -> Vec<DropdownOption> {
    [
        ("backend1", "Backend Option 1"),
        ("backend2", "Backend Option 2"),
        ("backend3", "Backend Option 3"),
        ("backend4", "Backend Option 4"),
        ("backend5", "Backend Option Neil"),
    ]
    .into_iter()
    .map(|(value, label)| DropdownOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

/// Persists an edited table entry.
#[tauri::command]
pub fn updated_entry(app: tauri::AppHandle, payload: EntryPayload) -> Result<String, String> {
    let store = ScopedEntryStore::from_app(&app, StoreScope::Entries)?;
    apply_updated_entry(&store, &payload)
}

/// Persists a named file payload.
#[tauri::command]
pub fn save_file(app: tauri::AppHandle, payload: EntryPayload) -> Result<String, String> {
    let store = ScopedEntryStore::from_app(&app, StoreScope::Files)?;
    apply_save_file(&store, &payload)
}

/// Lists the selectable backend options.
#[tauri::command]
pub fn get_dropdown_options() -> Result<Vec<DropdownOption>, String> {
    Ok(dropdown_options())
}
