//! Yandex Music HTTP client
//!
//! Search works anonymously; an OAuth token is sent when configured.
//! Spelling correction is always disabled (`nocorrect=true`) so a misspelt
//! title never turns into a confident match for some other track.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::{adapter, dto};
use crate::relay::domain::{CatalogTrack, ProviderError};
use crate::relay::http::{self, HttpOptions};

/// Production API root
pub const DEFAULT_API_BASE: &str = "https://api.music.yandex.net";

const CLIENT_HEADER: &str = "X-Yandex-Music-Client";
const CLIENT_ID: &str = "YandexMusicAndroid/24023621";

/// Yandex Music API client
pub struct YandexMusicClient {
    http_client: reqwest::Client,
    api_base: String,
}

impl YandexMusicClient {
    /// Create a client; `token` is the optional OAuth token
    pub fn new(
        options: &HttpOptions,
        api_base: impl Into<String>,
        token: Option<&str>,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_HEADER, HeaderValue::from_static(CLIENT_ID));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("OAuth {token}"))
                .map_err(|_| ProviderError::Network("invalid Yandex Music token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self {
            http_client: http::build_client_with_headers(options, headers)?,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search the catalog for tracks
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<CatalogTrack>, ProviderError> {
        let response = self.send_search_request(query).await?;
        Ok(adapter::to_catalog_tracks(response))
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(&self, query: &str) -> Result<dto::SearchResponse, ProviderError> {
        let url = self.search_request_url(query);
        tracing::debug!("Yandex Music search: {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.json::<dto::ErrorResponse>().await {
                tracing::debug!(
                    "Yandex Music search failed: {} ({:?}: {:?})",
                    status,
                    body.error.name,
                    body.error.message
                );
            }
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    fn search_request_url(&self, query: &str) -> String {
        format!(
            "{}/search?text={}&nocorrect=true&type=track&page=0",
            self.api_base,
            urlencoding::encode(query)
        )
    }
}
