// SPDX-License-Identifier: MPL-2.0
//! `license_desk` keeps a dark/light theme preference in sync across storage,
//! memory and the document root, and talks to a remote license API with
//! bearer-token authentication.
//!
//! - [`preferences`]: the theme store and its explicit scope
//! - [`client`]: authenticated create/list operations on licenses
//! - [`application::port`]: the traits both depend on
//! - [`infrastructure`]: file, memory, reqwest and token adapters

pub mod application;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod paths;
pub mod preferences;
