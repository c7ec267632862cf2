//! Process configuration, read once from the environment at startup.

use crate::sync::domain::KeywordConfig;
use std::env;
use thiserror::Error;

/// Port the serving layer listens on when `GANTRY_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or not unicode.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unparseable value.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Offending raw value.
        value: String,
    },
}

/// Static configuration for one Gantry process. There is no hot-reload;
/// changing any of these requires a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Owner of the mirrored repository.
    pub owner: String,
    /// Name of the mirrored repository.
    pub repo: String,
    /// Access token passed to the feed client.
    pub token: String,
    /// Port for the serving layer.
    pub port: u16,
    /// Keyword prefixes recognized by metadata extraction.
    pub keywords: KeywordConfig,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `GANTRY_REPO_OWNER`, `GANTRY_REPO_NAME`, and `GANTRY_TOKEN` are
    /// required. `GANTRY_PORT` and the four `GANTRY_KEYWORD_*` prefixes fall
    /// back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or the
    /// port does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = KeywordConfig::default();
        Ok(Self {
            owner: require("GANTRY_REPO_OWNER")?,
            repo: require("GANTRY_REPO_NAME")?,
            token: require("GANTRY_TOKEN")?,
            port: port_from_env()?,
            keywords: KeywordConfig {
                start_date: override_var("GANTRY_KEYWORD_START_DATE", defaults.start_date),
                due_date: override_var("GANTRY_KEYWORD_DUE_DATE", defaults.due_date),
                label: override_var("GANTRY_KEYWORD_LABEL", defaults.label),
                progress: override_var("GANTRY_KEYWORD_PROGRESS", defaults.progress),
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn override_var(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn port_from_env() -> Result<u16, ConfigError> {
    match env::var("GANTRY_PORT") {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "GANTRY_PORT",
            value: raw,
        }),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
