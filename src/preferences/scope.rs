// SPDX-License-Identifier: MPL-2.0
//! Explicit install/teardown scope for a [`PreferenceStore`].
//!
//! Code that receives the store directly never needs this. The scope exists
//! for consumers that are wired up before the store is built and must look it
//! up later; they get [`PreferenceError::NotInitialized`] instead of a panic
//! when nothing is installed.

use super::{PreferenceError, PreferenceStore};

#[derive(Debug)]
pub struct PreferenceScope<S, V> {
    store: Option<PreferenceStore<S, V>>,
}

impl<S, V> Default for PreferenceScope<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> PreferenceScope<S, V> {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Installs `store`, returning the previously installed one, if any.
    pub fn install(&mut self, store: PreferenceStore<S, V>) -> Option<PreferenceStore<S, V>> {
        self.store.replace(store)
    }

    /// Removes the installed store. Subsequent accesses fail until a new
    /// store is installed.
    pub fn teardown(&mut self) -> Option<PreferenceStore<S, V>> {
        self.store.take()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the installed store.
    pub fn use_theme(&self) -> Result<&PreferenceStore<S, V>, PreferenceError> {
        self.store.as_ref().ok_or(PreferenceError::NotInitialized)
    }

    /// Returns the installed store for mutation.
    pub fn use_theme_mut(&mut self) -> Result<&mut PreferenceStore<S, V>, PreferenceError> {
        self.store.as_mut().ok_or(PreferenceError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use crate::infrastructure::{MemoryStorage, RootElement};

    type Scope = PreferenceScope<MemoryStorage, RootElement>;

    #[test]
    fn empty_scope_reports_not_initialized() {
        let mut scope = Scope::new();
        assert!(!scope.is_active());
        assert_eq!(scope.use_theme().err(), Some(PreferenceError::NotInitialized));
        assert_eq!(
            scope.use_theme_mut().err(),
            Some(PreferenceError::NotInitialized)
        );
    }

    #[test]
    fn installed_store_is_reachable_until_teardown() {
        let mut scope = Scope::new();
        let (store, _) = PreferenceStore::initialize(MemoryStorage::new(), RootElement::new());
        assert!(scope.install(store).is_none());

        scope
            .use_theme_mut()
            .expect("store installed")
            .set(Theme::Light);
        assert_eq!(scope.use_theme().expect("store installed").get(), Theme::Light);

        let removed = scope.teardown().expect("store was installed");
        assert_eq!(removed.get(), Theme::Light);
        assert!(scope.use_theme().is_err());
    }
}
