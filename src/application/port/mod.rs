// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the preference store and
//! the license client only ever see the traits.
//!
//! # Available Ports
//!
//! - [`storage`]: key-value persistence for preferences and the bearer token
//! - [`visual`]: the document surface that carries the theme marker
//! - [`token`]: bearer token source for authenticated requests
//! - [`transport`]: HTTP request/response exchange
//!
//! # Example
//!
//! ```ignore
//! use license_desk::application::port::PreferenceStorage;
//!
//! fn stored_theme(storage: &impl PreferenceStorage) -> Option<String> {
//!     storage.get("theme").ok().flatten()
//! }
//! ```

pub mod storage;
pub mod token;
pub mod transport;
pub mod visual;

pub use storage::{PreferenceStorage, StorageError};
pub use token::TokenProvider;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
pub use visual::VisualState;
