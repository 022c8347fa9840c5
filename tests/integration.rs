// SPDX-License-Identifier: MPL-2.0
use license_desk::application::port::{PreferenceStorage, TokenProvider, VisualState};
use license_desk::domain::Theme;
use license_desk::infrastructure::{
    save_token, RootElement, StaticToken, StoredToken, TomlFileStorage, PREFERENCES_FILE,
};
use license_desk::preferences::{PreferenceStore, THEME_KEY};
use std::fs;
use tempfile::tempdir;

fn storage_in(dir: &std::path::Path) -> TomlFileStorage {
    TomlFileStorage::in_data_dir(Some(dir.to_path_buf())).expect("override path resolves")
}

#[test]
fn theme_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut first, warning) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());
    assert!(warning.is_none());
    assert_eq!(first.get(), Theme::Dark);
    first.set(Theme::Light);
    drop(first);

    let (second, warning) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());
    assert!(warning.is_none());
    assert_eq!(second.get(), Theme::Light);
    assert_eq!(second.visual().active_theme(), Some(Theme::Light));

    let on_disk = fs::read_to_string(dir.path().join(PREFERENCES_FILE)).expect("file written");
    assert!(on_disk.contains("theme = \"light\""));
}

#[test]
fn toggle_persists_each_step() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut store, _) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());

    for expected in [Theme::Light, Theme::Dark] {
        assert_eq!(store.toggle(), expected);
        let persisted = storage_in(dir.path()).get(THEME_KEY).expect("readable");
        assert_eq!(persisted.as_deref(), Some(expected.as_str()));
        assert_eq!(store.visual().markers(), vec![expected.as_str()]);
    }
}

#[test]
fn invalid_persisted_value_is_replaced_with_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut storage = storage_in(dir.path());
    storage.set(THEME_KEY, "blue").expect("seed value");

    let (store, warning) = PreferenceStore::initialize(storage, RootElement::new());
    assert!(warning.is_none());
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(
        storage_in(dir.path()).get(THEME_KEY).expect("readable").as_deref(),
        Some("dark")
    );
}

#[test]
fn corrupted_preference_file_yields_default_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join(PREFERENCES_FILE), "theme = = light").expect("write corrupt file");

    let (store, warning) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());
    assert_eq!(store.get(), Theme::Dark);
    assert!(warning.is_some());

    // The write-back during start-up repairs the file.
    let (reopened, warning) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());
    assert!(warning.is_none());
    assert_eq!(reopened.get(), Theme::Dark);
}

#[test]
fn token_and_theme_share_one_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut store, _) = PreferenceStore::initialize(storage_in(dir.path()), RootElement::new());

    let mut login_storage = storage_in(dir.path());
    save_token(&mut login_storage, "secret").expect("store token");
    store.set(Theme::Light);

    let tokens = StoredToken::new(storage_in(dir.path()));
    assert_eq!(tokens.token().as_deref(), Some("secret"));
    assert_eq!(StaticToken::none().token(), None);
}
