use crate::{AuthConfig, ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, SessionConfig};

use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the discovered config dir.
    ///
    /// Loading order:
    /// 1. Check for PSJ_CONFIG_DIR env var, else use ./.psj/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PSJ_* environment variable overrides
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load config from an explicit directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PSJ_CONFIG_DIR env var > ./.psj/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PSJ_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".psj"))
    }

    /// Directory holding the session file: explicit override or the config
    /// dir itself.
    pub fn session_dir(&self, config_dir: &Path) -> PathBuf {
        self.session
            .dir
            .clone()
            .unwrap_or_else(|| config_dir.to_path_buf())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("PSJ_AUTH_LATENCY_MS") {
            match value.parse() {
                Ok(ms) => self.auth.latency_ms = ms,
                Err(_) => warn!("Ignoring invalid PSJ_AUTH_LATENCY_MS: {value}"),
            }
        }
        if let Ok(value) = std::env::var("PSJ_SESSION_KEY")
            && !value.is_empty()
        {
            self.session.key = value;
        }
        if let Ok(value) = std::env::var("PSJ_LOG_LEVEL")
            && let Ok(level) = value.parse::<LogLevel>()
        {
            self.logging.level = level;
        }
    }
}
