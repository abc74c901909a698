//! Trait definitions for the relay pipeline and the provider APIs under it.
//!
//! Two layers of seams:
//! - [`LinkParser`], [`MetadataResolver`], [`CatalogMatcher`]: the per-provider
//!   capabilities the orchestrator is wired from
//! - [`ItunesLookupApi`], [`YandexSearchApi`]: the raw HTTP calls, so resolvers
//!   and matchers can be tested against canned responses
//!
//! # Example
//!
//! ```ignore
//! use track_relay::relay::traits::ItunesLookupApi;
//!
//! // In production code:
//! let resolver = AppleMusicResolver::new(ItunesClient::new(&options)?);
//!
//! // In tests:
//! let resolver = AppleMusicResolver::new(MockItunes::single("Alpha", Some("Beta")));
//! ```

use async_trait::async_trait;

use super::apple::{ItunesClient, dto as apple_dto};
use super::domain::{CatalogTrack, MatchOutcome, ProviderError};
use super::yandex::YandexMusicClient;
use crate::model::{MediaIdentity, Provider, ProviderTrackRef};

/// Recognises a provider's deep links.
///
/// Parsing never fails loudly: text that is not a link is the common case.
pub trait LinkParser: Send + Sync {
    /// Provider whose links this parser recognises
    fn provider(&self) -> Provider;

    /// Extract track identifiers, or `None` if `raw` is not this provider's link
    fn parse(&self, raw: &str) -> Option<ProviderTrackRef>;
}

/// Turns a parsed link into canonical track metadata.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    fn provider(&self) -> Provider;

    async fn resolve(&self, track_ref: &ProviderTrackRef) -> Result<MediaIdentity, ProviderError>;
}

/// Looks an identity up in another provider's catalog.
///
/// Implementations only ever add their own link to `identity`.
#[async_trait]
pub trait CatalogMatcher: Send + Sync {
    fn provider(&self) -> Provider;

    async fn find_match(&self, identity: &mut MediaIdentity) -> MatchOutcome;
}

/// Trait for the iTunes lookup endpoint.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ItunesLookupApi: Send + Sync {
    /// Look up a track by its iTunes id
    async fn lookup(&self, track_id: &str) -> Result<apple_dto::LookupResponse, ProviderError>;
}

/// Trait for Yandex Music track search.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait YandexSearchApi: Send + Sync {
    /// Search tracks with spelling correction disabled
    async fn search_tracks(&self, query: &str) -> Result<Vec<CatalogTrack>, ProviderError>;
}

// Implement traits for real clients

#[async_trait]
impl ItunesLookupApi for ItunesClient {
    async fn lookup(&self, track_id: &str) -> Result<apple_dto::LookupResponse, ProviderError> {
        self.lookup(track_id).await
    }
}

#[async_trait]
impl YandexSearchApi for YandexMusicClient {
    async fn search_tracks(&self, query: &str) -> Result<Vec<CatalogTrack>, ProviderError> {
        self.search_tracks(query).await
    }
}

/// Mock provider APIs for testing.
///
/// Each mock counts its calls through a shared counter so tests can assert
/// that a code path made no network requests.
#[cfg(test)]
pub mod mocks {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Mock iTunes lookup returning a fixed response.
    pub struct MockItunes {
        /// Response to return from every lookup
        pub response: Result<apple_dto::LookupResponse, ProviderError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockItunes {
        /// Create a mock from a raw JSON body, as the endpoint would send it.
        pub fn from_json(json: &str) -> Self {
            let response = serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()));
            Self {
                response,
                calls: Arc::default(),
            }
        }

        /// Create a mock returning exactly one track.
        pub fn single(track: &str, album: Option<&str>) -> Self {
            Self {
                response: Ok(apple_dto::LookupResponse {
                    result_count: 1,
                    results: vec![apple_dto::LookupResult {
                        track_name: Some(track.to_string()),
                        collection_name: album.map(str::to_string),
                        ..Default::default()
                    }],
                }),
                calls: Arc::default(),
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: ProviderError) -> Self {
            Self {
                response: Err(error),
                calls: Arc::default(),
            }
        }

        /// Shared handle to the number of lookups made
        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    #[async_trait]
    impl ItunesLookupApi for MockItunes {
        async fn lookup(
            &self,
            _track_id: &str,
        ) -> Result<apple_dto::LookupResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    /// Mock Yandex search returning predefined tracks.
    pub struct MockYandexSearch {
        /// Tracks to return from search
        pub results: Vec<CatalogTrack>,
        /// Error to return (takes precedence over results)
        pub error: Option<ProviderError>,
        calls: Arc<AtomicUsize>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockYandexSearch {
        /// Create a mock that returns no tracks.
        pub fn no_results() -> Self {
            Self::with_results(vec![])
        }

        /// Create a mock that returns the given tracks.
        pub fn with_results(results: Vec<CatalogTrack>) -> Self {
            Self {
                results,
                error: None,
                calls: Arc::default(),
                queries: Arc::default(),
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: ProviderError) -> Self {
            Self {
                error: Some(error),
                ..Self::no_results()
            }
        }

        /// Shared handle to the number of searches made
        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }

        /// Shared handle to every query received, in order
        pub fn query_log(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.queries)
        }
    }

    #[async_trait]
    impl YandexSearchApi for MockYandexSearch {
        async fn search_tracks(&self, query: &str) -> Result<Vec<CatalogTrack>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut queries) = self.queries.lock() {
                queries.push(query.to_string());
            }
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.results.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_utils::catalog_track;

        #[tokio::test]
        async fn test_mock_itunes_single() {
            let mock = MockItunes::single("Alpha", Some("Beta"));
            let counter = mock.call_counter();

            let response = mock.lookup("222").await.unwrap();

            assert_eq!(response.result_count, 1);
            assert_eq!(response.results[0].track_name.as_deref(), Some("Alpha"));
            assert_eq!(counter.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_mock_itunes_invalid_json_is_parse_error() {
            let mock = MockItunes::from_json("<html>oops</html>");
            let result = mock.lookup("222").await;
            assert!(matches!(result, Err(ProviderError::Parse(_))));
        }

        #[tokio::test]
        async fn test_mock_yandex_records_queries() {
            let mock = MockYandexSearch::with_results(vec![catalog_track("1", "Alpha", &["Beta"])]);
            let log = mock.query_log();

            let results = mock.search_tracks("Beta Alpha").await.unwrap();

            assert_eq!(results.len(), 1);
            assert_eq!(log.lock().unwrap().as_slice(), ["Beta Alpha".to_string()]);
        }

        #[tokio::test]
        async fn test_mock_yandex_error() {
            let mock = MockYandexSearch::with_error(ProviderError::Timeout);
            let result = mock.search_tracks("anything").await;
            assert_eq!(result, Err(ProviderError::Timeout));
        }
    }
}
