//! Telegram bot command.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::bot::{Bot, TelegramClient};
use crate::config::{self, Config};
use crate::error::{Error, ResultExt};
use crate::relay::RelayService;

/// Run the bot until Ctrl-C
pub fn cmd_run(rt: &Runtime, config: &Config, token: Option<&str>) -> anyhow::Result<()> {
    let token = token
        .or(config.credentials.telegram_bot_token.as_deref())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::missing_token("Telegram bot token", config::TELEGRAM_TOKEN_ENV))?;

    let service = RelayService::from_config(&config.relay_config())
        .with_context("building relay pipeline")?;
    let client = TelegramClient::new(&config.telegram.api_base, token, config.poll_timeout())
        .with_context("building Telegram client")?;

    tracing::info!(
        "Relaying links to {} via {}",
        service.target(),
        config.telegram.api_base
    );

    rt.block_on(Bot::new(client, Arc::new(service)).run());
    Ok(())
}
