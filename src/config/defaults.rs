// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

/// API root used when neither `settings.toml`, the environment nor the
/// command line names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// User agent sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("LicenseDesk/", env!("CARGO_PKG_VERSION"));
