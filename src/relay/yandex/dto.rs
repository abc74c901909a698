//! Yandex Music API Data Transfer Objects
//!
//! These types match the `/search` response of `api.music.yandex.net`.
//! DO NOT use these types outside the yandex module - convert to domain types.
//!
//! Track ids come back as JSON numbers from some API versions and as strings
//! from others; both are accepted.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope wrapping every successful response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub result: SearchResult,
}

/// Search result, one optional page per entity type
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Echo of the query text
    pub text: Option<String>,
    /// Absent when nothing matched
    pub tracks: Option<TrackPage>,
}

/// A page of track hits
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPage {
    pub total: Option<u64>,
    pub per_page: Option<u32>,
    #[serde(default)]
    pub results: Vec<Track>,
}

/// Track search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: Option<String>,
    /// Version suffix such as "Remastered", shown separately from the title
    pub version: Option<String>,
    pub available: Option<bool>,
    /// Every album the track is released on
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Album reference inside a track hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub title: Option<String>,
}

/// Error body sent with non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub name: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
