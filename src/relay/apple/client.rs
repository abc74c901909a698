//! iTunes lookup HTTP client
//!
//! The lookup endpoint is public and needs no credentials:
//! `GET https://itunes.apple.com/lookup?id=<trackId>`

use super::dto;
use crate::relay::domain::ProviderError;
use crate::relay::http::{self, HttpOptions};

/// Production lookup endpoint
pub const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// iTunes lookup client
pub struct ItunesClient {
    http_client: reqwest::Client,
    lookup_url: String,
}

impl ItunesClient {
    /// Create a client against the production endpoint
    pub fn new(options: &HttpOptions) -> Result<Self, ProviderError> {
        Self::with_lookup_url(options, DEFAULT_LOOKUP_URL)
    }

    /// Create a client against a custom lookup endpoint
    pub fn with_lookup_url(
        options: &HttpOptions,
        lookup_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: http::build_client(options)?,
            lookup_url: lookup_url.into(),
        })
    }

    /// Look up a track by id
    pub async fn lookup(&self, track_id: &str) -> Result<dto::LookupResponse, ProviderError> {
        let url = self.lookup_request_url(track_id);
        tracing::debug!("iTunes lookup: {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("iTunes lookup failed: {} -> {}", url, status);
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<dto::LookupResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    fn lookup_request_url(&self, track_id: &str) -> String {
        format!("{}?id={}", self.lookup_url, urlencoding::encode(track_id))
    }
}
