//! Telegram transport for the relay.
//!
//! Long-polls the Bot API, answers `/start` and `/help` itself and hands
//! every other text message to [`RelayService`]. Each message is handled in
//! its own task; the relay service holds no per-message state.

pub mod client;
pub mod dto;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::relay::RelayService;

pub use client::{DEFAULT_API_BASE, TelegramClient, TelegramError};

/// Reply to `/start`
pub const START_TEXT: &str = "Hi! Please paste a link to the music you want to share.";

/// Reply to `/help`
pub const HELP_TEXT: &str = "Use share menu in your music app to create a link. \
     Then paste it here to get links to other services.";

/// Pause after a failed poll before trying again
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// How long shutdown waits for replies already being processed
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Commands the bot answers without touching the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
}

impl BotCommand {
    /// Recognise `/start` and `/help`, with or without an `@botname` suffix
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split_once('@').map_or(name, |(name, _)| name);

        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Self::Start => START_TEXT,
            Self::Help => HELP_TEXT,
        }
    }
}

/// Reply for one incoming text: a command answer or the relay's reply
pub async fn reply_for(service: &RelayService, text: &str) -> String {
    match BotCommand::parse(text) {
        Some(command) => command.reply().to_string(),
        None => service.handle_text(text).await,
    }
}

/// Long-polling bot
pub struct Bot {
    client: Arc<TelegramClient>,
    service: Arc<RelayService>,
}

impl Bot {
    pub fn new(client: TelegramClient, service: Arc<RelayService>) -> Self {
        Self {
            client: Arc::new(client),
            service,
        }
    }

    /// Poll until Ctrl-C
    pub async fn run(&self) {
        let mut shutdown = std::pin::pin!(tokio::signal::ctrl_c());
        let mut offset = None;
        let mut replies = JoinSet::new();

        tracing::info!("Bot started, polling for updates");

        loop {
            let polled = tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping bot");
                    break;
                }
                polled = self.client.get_updates(offset) => polled,
            };

            while replies.try_join_next().is_some() {}

            match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.dispatch(update, &mut replies);
                    }
                }
                Err(e) => {
                    tracing::warn!("Polling for updates failed: {}", e);
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }

        let dropped = drain_replies(&mut replies, SHUTDOWN_GRACE).await;
        if dropped > 0 {
            tracing::warn!("Dropped {} replies still in flight at shutdown", dropped);
        }
    }

    fn dispatch(&self, update: dto::Update, replies: &mut JoinSet<()>) {
        let Some(message) = update.message else {
            return;
        };
        let Some(text) = message.text else {
            tracing::debug!("Ignoring non-text message {}", message.message_id);
            return;
        };

        let chat_id = message.chat.id;
        let message_id = message.message_id;
        if let Some(user) = &message.from {
            tracing::debug!(
                "Message {} from {} ({:?}): {}",
                message_id,
                user.id,
                user.username,
                text
            );
        }

        let client = Arc::clone(&self.client);
        let service = Arc::clone(&self.service);
        replies.spawn(async move {
            let reply = reply_for(&service, &text).await;
            if let Err(e) = client.send_message(chat_id, &reply, Some(message_id)).await {
                tracing::warn!("Failed to reply to message {} in chat {}: {}", message_id, chat_id, e);
            }
        });
    }
}

/// Wait up to `grace` for pending replies, abort the rest and return how many were aborted
async fn drain_replies(replies: &mut JoinSet<()>, grace: Duration) -> usize {
    if replies.is_empty() {
        return 0;
    }

    tracing::info!("Waiting for {} pending replies", replies.len());
    let drained = tokio::time::timeout(grace, async {
        while replies.join_next().await.is_some() {}
    })
    .await;

    if drained.is_ok() {
        return 0;
    }
    let dropped = replies.len();
    replies.abort_all();
    dropped
}
