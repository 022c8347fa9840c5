// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the [`port`] traits.
//!
//! - [`TomlFileStorage`] / [`MemoryStorage`]: [`PreferenceStorage`]
//! - [`RootElement`]: [`VisualState`]
//! - [`StaticToken`] / [`StoredToken`]: [`TokenProvider`]
//! - [`ReqwestTransport`]: [`HttpTransport`]
//!
//! [`port`]: crate::application::port
//! [`PreferenceStorage`]: crate::application::port::PreferenceStorage
//! [`VisualState`]: crate::application::port::VisualState
//! [`TokenProvider`]: crate::application::port::TokenProvider
//! [`HttpTransport`]: crate::application::port::HttpTransport

mod document;
mod http;
mod storage;
mod token;

pub use document::RootElement;
pub use http::ReqwestTransport;
pub use storage::{MemoryStorage, TomlFileStorage, PREFERENCES_FILE};
pub use token::{clear_token, save_token, StaticToken, StoredToken, TOKEN_KEY};
