//! Adapter configuration.
//!
//! Everything is read once at cold start. `from_lookup` takes the variable
//! source as a function so tests never touch the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use lambda_runtime::tracing::debug;

use crate::models::error::{AdapterError, AdapterResult};

/// Domain suffix of API Gateway's default endpoints.
pub const DEFAULT_DOMAIN_SUFFIX: &str = ".amazonaws.com";
/// `SERVER_NAME` used when the event carries no `Host` header.
pub const DEFAULT_SERVER_NAME: &str = "lambda";
/// Side file holding the application name.
pub const APP_NAME_FILE: &str = ".wsgi_app";

/// Settings that affect request translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Hosts ending with this suffix get the stage as `SCRIPT_NAME`.
    pub domain_suffix: String,
    pub fallback_server_name: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
            fallback_server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

/// Full adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Fully-qualified application name, `module.attr`.
    pub app: String,
    pub debug: bool,
    pub translator: TranslatorConfig,
}

impl AdapterConfig {
    /// Reads the configuration from the process environment.
    ///
    /// The side file is looked up in `LAMBDA_TASK_ROOT`, falling back to the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns `MissingAppName` if neither `WSGI_APP` nor the side file names
    /// an application.
    pub fn from_env() -> AdapterResult<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let root = lookup("LAMBDA_TASK_ROOT").map_or_else(|| PathBuf::from("."), PathBuf::from);
        Self::from_lookup(&root, lookup)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `MissingAppName` if no application name can be found.
    pub fn from_lookup<F>(root: &Path, lookup: F) -> AdapterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = lookup("WSGI_APP")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| read_app_file(&root.join(APP_NAME_FILE)))
            .ok_or(AdapterError::MissingAppName)?;

        let debug = lookup("WSGI_DEBUG").is_some_and(|v| parse_flag(&v));

        let mut translator = TranslatorConfig::default();
        if let Some(suffix) = lookup("WSGI_DOMAIN_SUFFIX") {
            translator.domain_suffix = suffix;
        }
        if let Some(name) = lookup("WSGI_SERVER_NAME") {
            translator.fallback_server_name = name;
        }

        Ok(Self {
            app,
            debug,
            translator,
        })
    }
}

fn read_app_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No application name file");
            None
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
