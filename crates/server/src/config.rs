//! # Application Configuration
//!
//! Configuration is loaded from environment variables (with `.env` support
//! via `dotenvy` in [`start`](crate::start)). The workspace token and the
//! translation API key are required; the process refuses to start without
//! them.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use std::env;

/// Environment variables that must be present and non-empty at startup.
pub const REQUIRED_VARS: [&str; 2] = ["NOTION_TOKEN", "DEEPSEEK_API_KEY"];

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required environment variable was not set.
    MissingVar(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::MissingVar(var) => {
                write!(f, "Missing required environment variable: {var}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The application configuration, mapped from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The workspace integration token. Loaded from `NOTION_TOKEN`.
    pub notion_token: String,
    /// The translation API key. Loaded from `DEEPSEEK_API_KEY`.
    pub deepseek_api_key: String,
    /// Optional override of the workspace API base URL. Loaded from
    /// `NOTION_API_URL`; tests point this at a mock server.
    #[serde(default)]
    pub notion_api_url: Option<String>,
    /// Optional override of the chat-completions endpoint. Loaded from
    /// `DEEPSEEK_API_URL`.
    #[serde(default)]
    pub deepseek_api_url: Option<String>,
}

fn default_port() -> u16 {
    9090
}

/// Loads the application configuration from environment variables.
///
/// Required variables are checked up front so a missing one is reported by
/// name instead of as a deserialization failure.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    for var in REQUIRED_VARS {
        if env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
            return Err(ConfigError::MissingVar(var.to_string()));
        }
    }

    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}
