// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: trait definitions implemented by [`crate::infrastructure`]
//!
//! # Dependency Rule
//!
//! - The application layer depends only on [`crate::domain`]
//! - Infrastructure implements the ports
//! - [`crate::preferences`] and [`crate::client`] consume the ports

pub mod port;
