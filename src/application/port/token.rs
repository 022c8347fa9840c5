// SPDX-License-Identifier: MPL-2.0
//! Bearer token source.

/// Supplies the current bearer token, if any.
///
/// The client only reads from a provider; rotation and storage of the token
/// happen elsewhere.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<P: TokenProvider + ?Sized> TokenProvider for std::sync::Arc<P> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}
