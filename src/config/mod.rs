pub mod bot_config;
pub mod logging_config;
pub mod queue_config;
pub mod server_config;

use crate::config::bot_config::BotConfig;
use crate::config::logging_config::LoggingConfig;
use crate::config::queue_config::QueueConfig;
use crate::config::server_config::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("queue.capacity must be at least 1")]
    ZeroCapacity,
    #[error("bot.list_char_limit must be at least 1")]
    ZeroListLimit,
    #[error("bot.token_env must name an environment variable")]
    EmptyTokenEnv,
    #[error("logging.level is invalid: {0}")]
    InvalidLogLevel(String),
}

/// Main configuration structure matching config.yaml format
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        let config: Config =
            serde_yaml::from_str(&content).with_context(|| "Failed to parse YAML config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else from `config.yaml` when present, else defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject values the bot cannot run with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.queue.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.bot.list_char_limit == 0 {
            return Err(ConfigError::ZeroListLimit);
        }
        if self.bot.token_env.trim().is_empty() {
            return Err(ConfigError::EmptyTokenEnv);
        }
        if let Some(Err(e)) = self.logging.parsed_level() {
            return Err(ConfigError::InvalidLogLevel(e));
        }
        Ok(())
    }
}
