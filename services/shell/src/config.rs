//! services/shell/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use talentos_core::MatchMode;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    /// Multiplier applied to every loading-screen delay. `0.0` skips them.
    pub loading_time_scale: f64,
    pub chat_match_mode: MatchMode,
    /// Replaces the bundled roadmap tables when set.
    pub roadmaps_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            loading_time_scale: 1.0,
            chat_match_mode: MatchMode::Substring,
            roadmaps_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let loading_time_scale = match lookup("LOADING_TIME_SCALE") {
            Some(raw) => {
                let scale = raw.trim().parse::<f64>().map_err(|e| {
                    ConfigError::InvalidValue("LOADING_TIME_SCALE".to_string(), e.to_string())
                })?;
                if !scale.is_finite() || scale < 0.0 {
                    return Err(ConfigError::InvalidValue(
                        "LOADING_TIME_SCALE".to_string(),
                        format!("'{}' must be a non-negative number", raw),
                    ));
                }
                scale
            }
            None => 1.0,
        };

        let chat_match_mode = match lookup("CHAT_MATCH_MODE") {
            Some(raw) => raw
                .parse::<MatchMode>()
                .map_err(|e| ConfigError::InvalidValue("CHAT_MATCH_MODE".to_string(), e))?,
            None => MatchMode::Substring,
        };

        let roadmaps_path = lookup("ROADMAPS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            loading_time_scale,
            chat_match_mode,
            roadmaps_path,
        })
    }
}
