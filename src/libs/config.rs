//! Process configuration.
//!
//! Everything comes from the environment (after loading an optional `.env`
//! file); nothing is persisted. The configuration is built once at start-up
//! and passed by reference to the components that need it.
//!
//! ## Variables
//!
//! - **`TODOIST_KEY`**: bearer token for the task service (required)
//! - **`TODOIST_API_URL`**: service base URL, defaults to the public API
//! - **`TODOIST_TIMEOUT_SECS`**: per-request timeout in seconds, defaults to 30
//! - **`TODOIST_REPORT_PROJECTS`**: comma-separated project menu
//! - **`TODOIST_REPORT_LABELS`**: comma-separated label menu
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todoist_report::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Talking to {}", config.todoist.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::api::todoist::TodoistConfig;
use crate::libs::conversation::{LABELS, PROJECTS};
use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use anyhow::Result;
use std::collections::HashMap;
use std::env;

pub const TOKEN_VAR: &str = "TODOIST_KEY";
pub const API_URL_VAR: &str = "TODOIST_API_URL";
pub const TIMEOUT_VAR: &str = "TODOIST_TIMEOUT_SECS";
pub const PROJECTS_VAR: &str = "TODOIST_REPORT_PROJECTS";
pub const LABELS_VAR: &str = "TODOIST_REPORT_LABELS";

pub const DEFAULT_API_URL: &str = "https://api.todoist.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    /// Connection settings for the task service.
    pub todoist: TodoistConfig,
    /// Project names offered by the conversation menu.
    pub projects: Vec<String>,
    /// Label names offered by the conversation menu.
    pub labels: Vec<String>,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `TODOIST_KEY` is missing or a numeric setting does
    /// not parse.
    pub fn read() -> Result<Config> {
        dotenv::dotenv().ok();
        Self::from_vars(env::vars())
    }

    /// Builds the configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        let api_token = vars
            .get(TOKEN_VAR)
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ReportError::MissingCredential(TOKEN_VAR.to_string()))?
            .to_string();

        let api_url = vars
            .get(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let timeout_secs = match vars.get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => anyhow::bail!(Message::InvalidConfigValue(TIMEOUT_VAR.to_string(), raw.clone())),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            todoist: TodoistConfig {
                api_token,
                api_url,
                timeout_secs,
            },
            projects: menu(vars.get(PROJECTS_VAR), &PROJECTS),
            labels: menu(vars.get(LABELS_VAR), &LABELS),
        })
    }
}

/// Splits a comma-separated menu, falling back to the built-in entries when
/// the variable is unset or lists nothing.
fn menu(raw: Option<&String>, default: &[&str]) -> Vec<String> {
    let items: Vec<String> = raw
        .map(|raw| raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect())
        .unwrap_or_default();

    if items.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}
