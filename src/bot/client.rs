//! Telegram Bot API HTTP client
//!
//! Method URLs embed the bot token, so they are never logged and transport
//! errors are stripped of their URL before they leave this module.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::dto;

/// Production Bot API root
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Slack on top of the long-poll timeout before the HTTP request gives up
const POLL_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Errors talking to the Bot API
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Bot API error {code:?}: {description}")]
    Api {
        code: Option<i32>,
        description: String,
    },

    #[error("Bot API response has no result")]
    MissingResult,
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }
}

/// Bot API client bound to one bot token
pub struct TelegramClient {
    http_client: reqwest::Client,
    bot_url: String,
    poll_timeout: Duration,
}

impl TelegramClient {
    pub fn new(
        api_base: &str,
        token: &str,
        poll_timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let http_client = reqwest::Client::builder()
            .user_agent(crate::relay::http::DEFAULT_USER_AGENT)
            .timeout(poll_timeout + POLL_TIMEOUT_MARGIN)
            .build()?;

        Ok(Self {
            http_client,
            bot_url: format!("{}/bot{}", api_base.trim_end_matches('/'), token),
            poll_timeout,
        })
    }

    /// Long-poll for updates after `offset`
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<dto::Update>, TelegramError> {
        let request = dto::GetUpdatesRequest {
            offset,
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: vec!["message"],
        };
        self.call("getUpdates", &request).await
    }

    /// Send a text message, optionally as a reply
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<dto::Message, TelegramError> {
        let request = dto::SendMessageRequest {
            chat_id,
            text,
            reply_to_message_id,
        };
        self.call("sendMessage", &request).await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::trace!("Bot API call: {}", method);

        let response: dto::ApiResponse<T> = self
            .http_client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(TelegramError::Api {
                code: response.error_code,
                description: response.description.unwrap_or_default(),
            });
        }

        response.result.ok_or(TelegramError::MissingResult)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.bot_url, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let client =
            TelegramClient::new("https://api.telegram.org/", "123:abc", Duration::from_secs(30))
                .unwrap();
        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }

    #[tokio::test]
    async fn test_network_error_hides_token() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = TelegramClient::new(
            &format!("http://127.0.0.1:{port}"),
            "123:SUPERSECRET",
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client.get_updates(None).await.unwrap_err();

        assert!(matches!(err, TelegramError::Network(_)));
        let logged = format!("Polling for updates failed: {}", err);
        assert!(!logged.contains("SUPERSECRET"), "token leaked: {logged}");
        assert!(!format!("{err:?}").contains("SUPERSECRET"));
    }

    #[test]
    fn test_api_error_display() {
        let err = TelegramError::Api {
            code: Some(401),
            description: "Unauthorized".to_string(),
        };
        assert!(err.to_string().contains("Unauthorized"));
    }
}
