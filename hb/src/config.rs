//! Configuration types and loading
//!
//! Secrets come from the environment (optionally seeded from `.env`);
//! everything else comes from an optional YAML file.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StartupError;
use crate::poller::PollerConfig;

/// Environment variable holding the status API token
pub const API_TOKEN_VAR: &str = "API_TOKEN";

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Environment variable holding the destination chat id
pub const CHAT_ID_VAR: &str = "CHAT_ID";

/// Older variable names still honored as fallbacks
const LEGACY_VARS: [(&str, &str); 3] = [
    (API_TOKEN_VAR, "PRACTICUM_TOKEN"),
    (BOT_TOKEN_VAR, "TELEGRAM_TOKEN"),
    (CHAT_ID_VAR, "TELEGRAM_CHAT_ID"),
];

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Status API settings
    pub api: ApiConfig,

    /// Telegram delivery settings
    pub telegram: TelegramConfig,

    /// Poll loop settings
    pub poll: PollerConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: ./homeworkbot.yml
        let local_config = PathBuf::from("homeworkbot.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User config: ~/.config/homeworkbot/homeworkbot.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("homeworkbot").join("homeworkbot.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed; the full load reports them later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(path) => path.clone(),
            None => {
                let local = PathBuf::from("homeworkbot.yml");
                if local.exists() {
                    local
                } else {
                    dirs::config_dir()?.join("homeworkbot").join("homeworkbot.yml")
                }
            }
        };
        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Status API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Homework status endpoint
    pub endpoint: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Telegram Bot API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.telegram.org".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Secrets required before polling may start
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, honoring legacy names
    ///
    /// Empty values count as missing. The first missing credential is
    /// reported, checked in the order API token, bot token, chat id.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| -> Result<String, StartupError> {
            let legacy = LEGACY_VARS
                .iter()
                .find(|(current, _)| *current == name)
                .map(|(_, legacy)| *legacy);

            std::iter::once(name)
                .chain(legacy)
                .filter_map(&lookup)
                .find(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    debug!(%name, "Credentials::from_lookup: missing");
                    StartupError::MissingCredential(name.to_string())
                })
        };

        Ok(Self {
            api_token: get(API_TOKEN_VAR)?,
            bot_token: get(BOT_TOKEN_VAR)?,
            chat_id: get(CHAT_ID_VAR)?,
        })
    }
}
