// SPDX-License-Identifier: MPL-2.0
//! [`PreferenceStorage`] adapters.
//!
//! - [`TomlFileStorage`]: flat string table in `preferences.toml` under the
//!   application data directory
//! - [`MemoryStorage`]: process-local map, for tests and ephemeral sessions

use crate::application::port::{PreferenceStorage, StorageError};
use crate::paths;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the preference table inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

// =============================================================================
// TomlFileStorage
// =============================================================================

/// Key-value table persisted as TOML.
///
/// Every call goes to disk, so several instances pointing at the same file
/// (the theme store and the token provider, for example) always see each
/// other's writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `preferences.toml` in the resolved data directory.
    ///
    /// See [`paths::get_app_data_dir_with_override`] for the resolution order.
    #[must_use]
    pub fn in_data_dir(override_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(override_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            Self::new(path)
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::Read(e.to_string()))?;
        toml::from_str(&content).map_err(|e| StorageError::Read(e.to_string()))
    }

    fn save_table(&self, table: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(table).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| StorageError::Write(e.to_string()))
    }

    /// Loads the table for a read-modify-write cycle. A corrupt file reads as
    /// empty here and is overwritten by the following save.
    fn load_table_for_write(&self) -> BTreeMap<String, String> {
        self.load_table().unwrap_or_else(|err| {
            tracing::warn!(%err, path = %self.path.display(), "discarding unreadable preference file");
            BTreeMap::new()
        })
    }
}

impl PreferenceStorage for TomlFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut table = self.load_table_for_write();
        table.insert(key.to_string(), value.to_string());
        self.save_table(&table)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut table = self.load_table_for_write();
        if table.remove(key).is_some() {
            self.save_table(&table)?;
        }
        Ok(())
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-process storage. Values are lost when it is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-filled with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}
