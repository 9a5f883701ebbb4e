//! # Configuration
//!
//! Everything is resolved once at startup from the environment
//! (after `.env` has been loaded) with a simple override hierarchy:
//! defaults → env vars.
//!
//! The resolved `Config` is passed explicitly into the completion client;
//! nothing reads the environment after startup.

use log::{debug, info};
use simplelog::LevelFilter;
use std::fmt;

use crate::inference::DEFAULT_OPENAI_BASE_URL;

// ============================================================================
// Defaults
// ============================================================================

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "RHYME_CHAT_LOG";

/// The model every request is sent to. Not configurable.
pub const MODEL: &str = "gpt-4o";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

// The API key never ends up in the log file.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(
                f,
                "API key must be set via the '{API_KEY_VAR}' environment variable"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Resolution
// ============================================================================

impl Config {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` for variable access.
    ///
    /// An empty API key counts as missing.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        // Base URL: env → default
        let base_url = lookup(BASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let config = Config {
            api_key,
            base_url,
            model: MODEL.to_string(),
        };
        info!("Resolved config for model {}", config.model);
        debug!("Config: {:?}", config);
        Ok(config)
    }
}

/// Log level from `RHYME_CHAT_LOG`, falling back to the default on absent or
/// unrecognized values.
pub fn log_level<F>(lookup: F) -> LevelFilter
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_LEVEL_VAR)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
