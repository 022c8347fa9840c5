// SPDX-License-Identifier: MPL-2.0
use crate::application::port::StorageError;
use crate::client::LicenseApiError;
use crate::preferences::PreferenceError;
use std::fmt;

/// Crate-level error used by configuration handling and the command-line
/// front end. Library operations return their module's own error type.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(StorageError),
    Api(LicenseApiError),
    Preferences(PreferenceError),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "{}", e),
            Error::Api(e) => write!(f, "{}", e),
            Error::Preferences(e) => write!(f, "{}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<LicenseApiError> for Error {
    fn from(err: LicenseApiError) -> Self {
        Error::Api(err)
    }
}

impl From<PreferenceError> for Error {
    fn from(err: PreferenceError) -> Self {
        Error::Preferences(err)
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
