use std::{collections::HashMap, fs};

use serde::Deserialize;
use tracing_subscriber::{filter::ParseError, EnvFilter};

pub const SETTINGS_FILE: &str = "server.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub dataset_path: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8050".into(),
            dataset_path: "spacex_launch_dash.csv".into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

/// Defaults, then `server.toml` in the working directory, then the
/// environment. A settings file that does not parse is skipped; its error is
/// returned so it can be logged once the subscriber is installed.
pub fn load_settings() -> (Settings, Option<toml::de::Error>) {
    let mut settings = Settings::default();
    let mut file_error = None;

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        file_error = apply_file_settings(&mut settings, &raw).err();
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    (settings, file_error)
}

/// Reads the flat string table of `server.toml`. On a parse error the
/// settings are left untouched.
pub fn apply_file_settings(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("dataset_path") {
        settings.dataset_path = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

/// `EnvFilter` for `log_filter`, or `info` plus the rejection when the
/// directive string does not parse.
pub fn log_filter(raw: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(raw) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(error)),
    }
}

/// Later keys win: the `APP__` spelling overrides the short one.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["SERVER_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = lookup(key) {
            settings.server_bind = v;
        }
    }
    for key in ["DATASET_PATH", "APP__DATASET_PATH"] {
        if let Some(v) = lookup(key) {
            settings.dataset_path = v;
        }
    }
    for key in ["RUST_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = lookup(key) {
            settings.log_filter = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
