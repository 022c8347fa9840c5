// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence port.
//!
//! Preferences and the bearer token are stored as plain strings under fixed
//! keys. Adapters decide where the values live (a TOML file, memory, ...).

use std::fmt;

/// Errors reported by a [`PreferenceStorage`] adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store exists but could not be read or parsed.
    Read(String),
    /// The value could not be written.
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Read(msg) => write!(f, "Storage read failed: {msg}"),
            StorageError::Write(msg) => write!(f, "Storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Get/set-by-key storage capability.
///
/// `get` returns `Ok(None)` for a key that was never written. Implementations
/// must be `Send` so stores can move into async tasks.
pub trait PreferenceStorage: Send {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
