//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`ProviderError`], [`TelegramError`], [`ConfigError`]); the CLI edge
//! uses `anyhow`. [`Error`] collects them for code that spans subsystems.
//!
//! # Example
//!
//! ```ignore
//! use track_relay::error::{Error, Result, ResultExt};
//!
//! fn start(config: &Config) -> Result<RelayService> {
//!     RelayService::from_config(&config.relay_config())
//!         .map_err(Error::from)
//!         .with_context("building relay pipeline")
//! }
//! ```

use crate::bot::TelegramError;
use crate::config::ConfigError;
use crate::relay::ProviderError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Source or target provider error
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Bot API error
    #[error("Telegram error: {0}")]
    Telegram(#[from] TelegramError),

    /// A required credential is not configured
    #[error("Missing {name}; set {env} or add it to the config file")]
    MissingToken {
        name: &'static str,
        env: &'static str,
    },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a missing-credential error.
    pub fn missing_token(name: &'static str, env: &'static str) -> Self {
        Self::MissingToken { name, env }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ProviderError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Provider(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, TelegramError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Telegram(e).context(ctx))
    }
}
