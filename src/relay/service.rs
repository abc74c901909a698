//! Relay service - orchestrates one inbound message end to end
//!
//! 1. Parse the text with each source provider's link parser
//! 2. Resolve the parsed link to track metadata
//! 3. Search the target provider's catalog for the same track
//! 4. Format the reply
//!
//! Parse and lookup failures end the request with the same apology; a
//! failed or inconclusive catalog search still produces a normal reply, with
//! an empty link.

use std::sync::Arc;

use crate::model::{MediaIdentity, Provider};
use crate::relay::{
    apple::{AppleMusicLinkParser, AppleMusicResolver, ItunesClient},
    domain::{MatchOutcome, ProviderError, RelayError},
    http::HttpOptions,
    traits::{CatalogMatcher, LinkParser, MetadataResolver},
    yandex::{YandexMusicClient, YandexMusicMatcher},
};

/// Reply sent for anything that could not be turned into a track
pub const APOLOGY: &str = "Sorry, couldn't parse the link. We are working on this problem.";

/// Pipeline stage a message reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStage {
    Parsing,
    Resolving,
    Matching,
    Done,
}

/// Parser and resolver for one source provider
pub struct SourcePipeline {
    pub parser: Arc<dyn LinkParser>,
    pub resolver: Arc<dyn MetadataResolver>,
}

/// Everything the service learned about one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The message ended early at `stage`
    Rejected { stage: RelayStage, reason: RelayError },
    /// The message was resolved; the target link may or may not be present
    Done {
        identity: MediaIdentity,
        target: Provider,
        matched: MatchOutcome,
    },
}

impl RelayOutcome {
    /// Last stage the message reached
    pub fn stage(&self) -> RelayStage {
        match self {
            Self::Rejected { stage, .. } => *stage,
            Self::Done { .. } => RelayStage::Done,
        }
    }

    /// Text to send back to the user
    pub fn reply_text(&self) -> String {
        match self {
            Self::Rejected { .. } => APOLOGY.to_string(),
            Self::Done {
                identity, target, ..
            } => format_reply(identity, *target),
        }
    }
}

/// Settings for wiring the production pipeline
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub http: HttpOptions,
    pub apple_link_prefix: String,
    pub apple_lookup_url: String,
    pub yandex_api_base: String,
    pub yandex_track_link_base: String,
    pub yandex_token: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            http: HttpOptions::default(),
            apple_link_prefix: crate::relay::apple::DEFAULT_LINK_PREFIX.to_string(),
            apple_lookup_url: crate::relay::apple::DEFAULT_LOOKUP_URL.to_string(),
            yandex_api_base: crate::relay::yandex::DEFAULT_API_BASE.to_string(),
            yandex_track_link_base: crate::relay::yandex::DEFAULT_TRACK_LINK_BASE.to_string(),
            yandex_token: None,
        }
    }
}

/// Stateless relay service; safe to share between concurrent handlers
pub struct RelayService {
    sources: Vec<SourcePipeline>,
    target: Arc<dyn CatalogMatcher>,
}

impl RelayService {
    /// Create a service from explicit components
    pub fn new(sources: Vec<SourcePipeline>, target: Arc<dyn CatalogMatcher>) -> Self {
        Self { sources, target }
    }

    /// Wire Apple Music as the source and Yandex Music as the target
    pub fn from_config(config: &RelayConfig) -> Result<Self, ProviderError> {
        let itunes = ItunesClient::with_lookup_url(&config.http, &config.apple_lookup_url)?;
        let yandex = YandexMusicClient::new(
            &config.http,
            &config.yandex_api_base,
            config.yandex_token.as_deref(),
        )?;

        let apple = SourcePipeline {
            parser: Arc::new(AppleMusicLinkParser::new(&config.apple_link_prefix)),
            resolver: Arc::new(AppleMusicResolver::new(itunes)),
        };
        let target = YandexMusicMatcher::with_track_link_base(yandex, &config.yandex_track_link_base);

        Ok(Self::new(vec![apple], Arc::new(target)))
    }

    /// Provider whose links end up in replies
    pub fn target(&self) -> Provider {
        self.target.provider()
    }

    /// Run the pipeline for one message and return the reply text
    pub async fn handle_text(&self, raw: &str) -> String {
        let reply = self.process(raw).await.reply_text();
        tracing::debug!("{} -> {}", raw, reply);
        reply
    }

    /// Run the pipeline for one message
    pub async fn process(&self, raw: &str) -> RelayOutcome {
        tracing::trace!(stage = ?RelayStage::Parsing);
        let Some((source, track_ref)) = self
            .sources
            .iter()
            .find_map(|s| s.parser.parse(raw).map(|r| (s, r)))
        else {
            tracing::debug!("Rejected {:?}: not a recognised link", raw);
            return RelayOutcome::Rejected {
                stage: RelayStage::Parsing,
                reason: RelayError::NotALink,
            };
        };

        tracing::trace!(stage = ?RelayStage::Resolving, track_id = %track_ref.track_id);
        let mut identity = match source.resolver.resolve(&track_ref).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::info!(
                    "Rejected {:?}: {} lookup of track {} failed: {}",
                    raw,
                    source.resolver.provider(),
                    track_ref.track_id,
                    e
                );
                return RelayOutcome::Rejected {
                    stage: RelayStage::Resolving,
                    reason: RelayError::LookupFailed(e),
                };
            }
        };

        tracing::trace!(stage = ?RelayStage::Matching, track = identity.track());
        let matched = self.target.find_match(&mut identity).await;
        if !matched.is_matched() {
            tracing::info!(
                "No {} link for {:?} ({:?})",
                self.target.provider(),
                identity.track(),
                matched
            );
        }

        RelayOutcome::Done {
            identity,
            target: self.target.provider(),
            matched,
        }
    }
}

/// Format the reply for a resolved identity.
///
/// The target link slot is left empty when no match was found.
pub fn format_reply(identity: &MediaIdentity, target: Provider) -> String {
    let from_album = identity
        .album()
        .map(|album| format!(" from album {album}"))
        .unwrap_or_default();

    format!(
        "This is a link to {}{}. {} link is {}",
        identity.track(),
        from_album,
        target.display_name(),
        identity.link(target).unwrap_or_default()
    )
}
