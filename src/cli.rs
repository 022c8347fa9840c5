// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! ```text
//! license-desk [--config-dir DIR] [--data-dir DIR] [--api-url URL] <command>
//!
//!   theme [get]                 print the active theme
//!   theme set <dark|light>      switch theme
//!   theme toggle                flip between dark and light
//!   token set <TOKEN>           store the bearer token used for API calls
//!   token clear                 forget the stored token
//!   licenses list               list licenses
//!   licenses add --plan P --duration N --details D --status S
//!                [--purchase-date YYYY-MM-DD] [--due-date YYYY-MM-DD]
//! ```

use crate::client::ResourceClient;
use crate::config;
use crate::domain::{CreateLicenseRequest, License, Theme};
use crate::error::{Error, Result};
use crate::infrastructure::{
    clear_token, save_token, ReqwestTransport, RootElement, StoredToken, TomlFileStorage,
};
use crate::preferences::{PreferenceScope, PreferenceStore};
use chrono::{Months, NaiveDate};
use std::ffi::OsString;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const USAGE: &str = "\
Usage: license-desk [--config-dir DIR] [--data-dir DIR] [--api-url URL] <command>

Commands:
  theme [get]                 Print the active theme
  theme set <dark|light>      Switch theme
  theme toggle                Flip between dark and light
  token set <TOKEN>           Store the bearer token used for API calls
  token clear                 Forget the stored token
  licenses list               List licenses
  licenses add --plan P --duration N --details D --status S
               [--purchase-date YYYY-MM-DD] [--due-date YYYY-MM-DD]
";

// =============================================================================
// Parsed arguments
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config_dir: Option<String>,
    pub data_dir: Option<String>,
    pub api_url: Option<String>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ThemeGet,
    ThemeSet(Theme),
    ThemeToggle,
    TokenSet(String),
    TokenClear,
    LicensesList,
    LicensesAdd(AddLicenseArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLicenseArgs {
    pub plan: String,
    pub duration: u32,
    pub details: String,
    pub status: String,
    pub purchase_date: Option<String>,
    pub due_date: Option<String>,
}

impl AddLicenseArgs {
    /// Builds the request, filling missing dates: the purchase date defaults
    /// to `today`, the due date to purchase date plus `duration` months.
    ///
    /// Explicit dates are forwarded untouched.
    pub fn into_request(self, today: NaiveDate) -> Result<CreateLicenseRequest> {
        let purchase_date = self
            .purchase_date
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());

        let due_date = match self.due_date {
            Some(due) => due,
            None => NaiveDate::parse_from_str(&purchase_date, DATE_FORMAT)
                .ok()
                .and_then(|start| start.checked_add_months(Months::new(self.duration)))
                .map(|due| due.format(DATE_FORMAT).to_string())
                .ok_or_else(|| {
                    Error::Usage(format!(
                        "cannot derive a due date from purchase date '{purchase_date}'; pass --due-date"
                    ))
                })?,
        };

        Ok(CreateLicenseRequest {
            purchase_date,
            due_date,
            details: self.details,
            license_plan: self.plan,
            duration: self.duration,
            status: self.status,
        })
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses the process arguments (without the program name).
pub fn parse(raw: Vec<OsString>) -> Result<Cli> {
    let mut args = pico_args::Arguments::from_vec(raw);

    if args.contains(["-h", "--help"]) {
        return Ok(Cli {
            config_dir: None,
            data_dir: None,
            api_url: None,
            command: Command::Help,
        });
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let api_url = args.opt_value_from_str("--api-url")?;

    let command = match args.subcommand()?.as_deref() {
        None => Command::Help,
        Some("theme") => match args.subcommand()?.as_deref() {
            None | Some("get") => Command::ThemeGet,
            Some("set") => {
                let raw: String = args.free_from_str()?;
                Command::ThemeSet(raw.parse().map_err(|e| Error::Usage(format!("{e}")))?)
            }
            Some("toggle") => Command::ThemeToggle,
            Some(other) => return Err(unknown("theme", other)),
        },
        Some("token") => match args.subcommand()?.as_deref() {
            Some("set") => Command::TokenSet(args.free_from_str()?),
            Some("clear") => Command::TokenClear,
            Some(other) => return Err(unknown("token", other)),
            None => return Err(Error::Usage("token requires 'set' or 'clear'".into())),
        },
        Some("licenses") => match args.subcommand()?.as_deref() {
            None | Some("list") => Command::LicensesList,
            Some("add") => Command::LicensesAdd(AddLicenseArgs {
                plan: args.value_from_str("--plan")?,
                duration: args.value_from_str("--duration")?,
                details: args.opt_value_from_str("--details")?.unwrap_or_default(),
                status: args.value_from_str("--status")?,
                purchase_date: args.opt_value_from_str("--purchase-date")?,
                due_date: args.opt_value_from_str("--due-date")?,
            }),
            Some(other) => return Err(unknown("licenses", other)),
        },
        Some(other) => return Err(Error::Usage(format!("unknown command '{other}'"))),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Usage(format!("unexpected arguments: {rest:?}")));
    }

    Ok(Cli {
        config_dir,
        data_dir,
        api_url,
        command,
    })
}

fn unknown(group: &str, sub: &str) -> Error {
    Error::Usage(format!("unknown {group} subcommand '{sub}'"))
}

// =============================================================================
// Execution
// =============================================================================

fn data_storage() -> Result<TomlFileStorage> {
    TomlFileStorage::in_data_dir(None)
        .ok_or_else(|| Error::Config("cannot determine the data directory".into()))
}

/// Runs a parsed command and returns the text to print.
///
/// Directory overrides from `cli` must already be registered with
/// [`crate::paths::init_cli_overrides`].
pub async fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Help => Ok(USAGE.to_string()),
        Command::ThemeGet | Command::ThemeSet(_) | Command::ThemeToggle => {
            let (store, warning) = PreferenceStore::initialize(data_storage()?, RootElement::new());
            if let Some(key) = warning {
                tracing::warn!(warning = %key, "theme preference could not be read");
            }

            let mut scope = PreferenceScope::new();
            scope.install(store);
            let store = scope.use_theme_mut()?;
            match cli.command {
                Command::ThemeSet(theme) => store.set(theme),
                Command::ThemeToggle => {
                    store.toggle();
                }
                _ => {}
            }
            let output = format!(
                "{} (class=\"{}\")",
                store.get(),
                store.visual().class_attribute()
            );
            scope.teardown();
            Ok(output)
        }
        Command::TokenSet(token) => {
            save_token(&mut data_storage()?, &token)?;
            Ok("token stored".to_string())
        }
        Command::TokenClear => {
            clear_token(&mut data_storage()?)?;
            Ok("token cleared".to_string())
        }
        Command::LicensesList => {
            let client = build_client(cli.api_url.as_deref())?;
            let envelope = client.list_licenses().await?;
            let mut lines = vec![envelope.message];
            lines.extend(envelope.data.unwrap_or_default().iter().map(format_license));
            Ok(lines.join("\n"))
        }
        Command::LicensesAdd(args) => {
            let request = args.into_request(chrono::Local::now().date_naive())?;
            let client = build_client(cli.api_url.as_deref())?;
            let envelope = client.create_license(&request).await?;
            Ok(match envelope.data {
                Some(license) => format!("{}\n{}", envelope.message, format_license(&license)),
                None => envelope.message,
            })
        }
    }
}

fn build_client(
    api_url: Option<&str>,
) -> Result<ResourceClient<ReqwestTransport, StoredToken<TomlFileStorage>>> {
    let (config, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(warning = %key, "using default configuration");
    }
    let transport =
        ReqwestTransport::new(&config.api.user_agent).map_err(|e| Error::Io(e.to_string()))?;
    Ok(ResourceClient::new(
        config.resolve_base_url(api_url),
        transport,
        StoredToken::new(data_storage()?),
    ))
}

/// One-line rendering of a license.
#[must_use]
pub fn format_license(license: &License) -> String {
    format!(
        "{}  {}  {} -> {}  {} months  [{}]  {}",
        license.id,
        license.license_plan,
        license.purchase_date,
        license.due_date,
        license.duration,
        license.status,
        license.details
    )
}
