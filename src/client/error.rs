// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Message used when a response arrives without a usable envelope.
pub const INVALID_RESPONSE: &str = "Invalid response from server";

/// The only error type returned by [`ResourceClient`](super::ResourceClient)
/// operations.
///
/// Transport failures are converted into [`LicenseApiError::Domain`] at the
/// client boundary, so callers never see transport internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseApiError {
    /// A successful response whose body is empty, falsy or not an envelope.
    Validation(String),
    /// Server-reported failure message, or the operation's default message.
    Domain(String),
}

impl LicenseApiError {
    /// Returns the human-readable message carried by either variant.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            LicenseApiError::Validation(msg) | LicenseApiError::Domain(msg) => msg,
        }
    }

    pub(crate) fn invalid_response() -> Self {
        LicenseApiError::Validation(INVALID_RESPONSE.to_string())
    }
}

impl fmt::Display for LicenseApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LicenseApiError {}
