// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain data with no I/O.
//!
//! # Modules
//!
//! - [`theme`]: the two-valued [`Theme`](theme::Theme) preference
//! - [`license`]: [`License`](license::License),
//!   [`CreateLicenseRequest`](license::CreateLicenseRequest) and the
//!   [`ResponseEnvelope`](license::ResponseEnvelope) wrapper

pub mod license;
pub mod theme;

pub use license::{CreateLicenseRequest, License, ResponseEnvelope};
pub use theme::{Theme, UnknownTheme};
