//! Finds a resolved identity in the Yandex Music catalog.

use async_trait::async_trait;

use super::YandexMusicClient;
use crate::model::{MediaIdentity, Provider};
use crate::relay::domain::MatchOutcome;
use crate::relay::matching::{self, Selection};
use crate::relay::traits::{CatalogMatcher, YandexSearchApi};

/// Public track page prefix; the track id is appended
pub const DEFAULT_TRACK_LINK_BASE: &str = "https://music.yandex.ru/track";

/// Cross-catalog matcher backed by Yandex Music search
pub struct YandexMusicMatcher<S = YandexMusicClient> {
    api: S,
    track_link_base: String,
}

impl<S: YandexSearchApi> YandexMusicMatcher<S> {
    pub fn new(api: S) -> Self {
        Self::with_track_link_base(api, DEFAULT_TRACK_LINK_BASE)
    }

    pub fn with_track_link_base(api: S, track_link_base: impl Into<String>) -> Self {
        Self {
            api,
            track_link_base: track_link_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public link for a Yandex Music track id
    pub fn track_link(&self, id: &str) -> String {
        format!("{}/{}", self.track_link_base, id)
    }
}

#[async_trait]
impl<S: YandexSearchApi> CatalogMatcher for YandexMusicMatcher<S> {
    fn provider(&self) -> Provider {
        Provider::YandexMusic
    }

    async fn find_match(&self, identity: &mut MediaIdentity) -> MatchOutcome {
        // Source and target are the same service: nothing to search for
        if let Some(link) = identity.link(Provider::YandexMusic) {
            return MatchOutcome::Matched {
                provider: Provider::YandexMusic,
                link: link.to_string(),
            };
        }

        let query = matching::build_query(identity);

        let candidates = match self.api.search_tracks(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Yandex Music search for {:?} failed: {}", query, e);
                return MatchOutcome::SearchFailed(e);
            }
        };

        if candidates.is_empty() {
            tracing::debug!("Not found any Yandex Music tracks for {:?}", query);
            return MatchOutcome::NoResults;
        }

        match matching::select_match(identity, &candidates) {
            Selection::Unique(track) => {
                let link = self.track_link(&track.id);
                identity.attach_link(Provider::YandexMusic, link.clone());
                tracing::info!("Matched {:?} to Yandex Music track {}", query, track.id);
                MatchOutcome::Matched {
                    provider: Provider::YandexMusic,
                    link,
                }
            }
            Selection::Empty => {
                tracing::debug!(
                    "No exact Yandex Music match for {:?} among {} results: {:?}",
                    query,
                    candidates.len(),
                    candidates
                );
                MatchOutcome::NoConfidentMatch { candidates: 0 }
            }
            Selection::Ambiguous(tracks) => {
                tracing::debug!(
                    "Found bad amount of tracks in Yandex Music for {:?}: {:?}",
                    query,
                    tracks
                );
                MatchOutcome::NoConfidentMatch {
                    candidates: tracks.len(),
                }
            }
        }
    }
}
