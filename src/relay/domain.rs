//! Internal domain types for the relay pipeline.
//!
//! These types are OUR types - they don't change when provider APIs change.
//! Provider responses get converted into them by each provider's adapter.

use crate::model::Provider;

/// A target-catalog search hit, reduced to what disambiguation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTrack {
    /// Provider-internal track id
    pub id: String,
    /// Track title as listed in the catalog
    pub title: String,
    /// Titles of every album the track appears on
    pub album_titles: Vec<String>,
}

/// Errors from a single provider call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Expected exactly one result, got {0}")]
    UnexpectedResultCount(u64),

    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Why a message was rejected before a reply with track data could be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Input is not a recognised link")]
    NotALink,

    #[error("Lookup failed: {0}")]
    LookupFailed(#[from] ProviderError),
}

/// Result of trying to find an identity in a target catalog.
///
/// None of these are errors for the user; only `Matched` changes the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Exactly one confident candidate; its link was attached
    Matched { provider: Provider, link: String },
    /// The search returned nothing
    NoResults,
    /// Zero or several candidates survived disambiguation
    NoConfidentMatch { candidates: usize },
    /// The search call itself failed
    SearchFailed(ProviderError),
}

impl MatchOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failed_wraps_provider_error() {
        let err: RelayError = ProviderError::Status(500).into();
        assert_eq!(err, RelayError::LookupFailed(ProviderError::Status(500)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_match_outcome_is_matched() {
        let matched = MatchOutcome::Matched {
            provider: Provider::YandexMusic,
            link: "https://music.yandex.ru/track/1".to_string(),
        };
        assert!(matched.is_matched());
        assert!(!MatchOutcome::NoResults.is_matched());
        assert!(!MatchOutcome::NoConfidentMatch { candidates: 2 }.is_matched());
    }
}
