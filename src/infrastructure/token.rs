// SPDX-License-Identifier: MPL-2.0
//! [`TokenProvider`] adapters.

use crate::application::port::{PreferenceStorage, StorageError, TokenProvider};

/// Storage key under which the login flow keeps the bearer token.
pub const TOKEN_KEY: &str = "token";

/// A fixed token, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from a [`PreferenceStorage`] on every request, so a token
/// stored by another component after start-up is picked up.
#[derive(Debug, Clone)]
pub struct StoredToken<S> {
    storage: S,
}

impl<S> StoredToken<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: PreferenceStorage + Sync> TokenProvider for StoredToken<S> {
    fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!(%err, "failed to read stored token; sending request without one");
                None
            }
        }
    }
}

/// Stores `token` where [`StoredToken`] will find it.
pub fn save_token(storage: &mut impl PreferenceStorage, token: &str) -> Result<(), StorageError> {
    storage.set(TOKEN_KEY, token)
}

/// Forgets the stored token.
pub fn clear_token(storage: &mut impl PreferenceStorage) -> Result<(), StorageError> {
    storage.remove(TOKEN_KEY)
}
