//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\track-relay\config.toml
//! - macOS: ~/Library/Application Support/track-relay/config.toml
//! - Linux: ~/.config/track-relay/config.toml
//!
//! Every section is optional; missing keys take their defaults. Tokens can
//! also come from the environment, which wins over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::bot;
use crate::relay::{
    RelayConfig,
    apple::{DEFAULT_LINK_PREFIX, DEFAULT_LOOKUP_URL},
    http::{DEFAULT_USER_AGENT, HttpOptions},
    yandex::{DEFAULT_API_BASE, DEFAULT_TRACK_LINK_BASE},
};

/// Environment variable overriding `credentials.telegram_bot_token`
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable overriding `credentials.yandex_music_token`
pub const YANDEX_TOKEN_ENV: &str = "YANDEX_MUSIC_TOKEN";

/// Smallest provider timeout accepted from the config file
const MIN_TIMEOUT_SECS: u64 = 1;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Outbound HTTP settings shared by provider clients
    pub http: HttpConfig,

    /// Apple Music source settings
    pub apple: AppleConfig,

    /// Yandex Music target settings
    pub yandex: YandexConfig,

    /// Telegram transport settings
    pub telegram: TelegramConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Telegram bot token from @BotFather
    pub telegram_bot_token: Option<String>,

    /// Yandex Music OAuth token (search works anonymously without it)
    pub yandex_music_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout for provider calls
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppleConfig {
    /// Links must start with this prefix to be recognised
    pub link_prefix: String,

    /// iTunes lookup endpoint
    pub lookup_url: String,
}

impl Default for AppleConfig {
    fn default() -> Self {
        Self {
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YandexConfig {
    /// Base URL of the Yandex Music API
    pub api_base: String,

    /// Track ids are appended to this to build reply links
    pub track_link_base: String,
}

impl Default for YandexConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            track_link_base: DEFAULT_TRACK_LINK_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_base: String,

    /// Long-poll timeout passed to `getUpdates`
    pub poll_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: bot::DEFAULT_API_BASE.to_string(),
            poll_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Settings for wiring the relay pipeline
    ///
    /// A zero `http.timeout_secs` would fail every provider call, so it is
    /// raised to one second.
    pub fn relay_config(&self) -> RelayConfig {
        if self.http.timeout_secs < MIN_TIMEOUT_SECS {
            tracing::warn!(
                "http.timeout_secs = {} is too small, using {}",
                self.http.timeout_secs,
                MIN_TIMEOUT_SECS
            );
        }

        RelayConfig {
            http: HttpOptions {
                timeout: Duration::from_secs(self.http.timeout_secs.max(MIN_TIMEOUT_SECS)),
                user_agent: self.http.user_agent.clone(),
            },
            apple_link_prefix: self.apple.link_prefix.clone(),
            apple_lookup_url: self.apple.lookup_url.clone(),
            yandex_api_base: self.yandex.api_base.clone(),
            yandex_track_link_base: self.yandex.track_link_base.clone(),
            yandex_token: self.credentials.yandex_music_token.clone(),
        }
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.telegram.poll_timeout_secs)
    }

    /// Replace tokens with values from the environment where set
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(TELEGRAM_TOKEN_ENV).ok(),
            std::env::var(YANDEX_TOKEN_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, telegram: Option<String>, yandex: Option<String>) {
        if let Some(token) = telegram.filter(|t| !t.is_empty()) {
            self.credentials.telegram_bot_token = Some(token);
        }
        if let Some(token) = yandex.filter(|t| !t.is_empty()) {
            self.credentials.yandex_music_token = Some(token);
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("track-relay"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path, with the same fallbacks as [`load`]
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
