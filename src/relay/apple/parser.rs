//! Apple Music share-link parser
//!
//! Accepted shape:
//! `https://music.apple.com/ru/album/<album-slug>/<collectionId>?i=<trackId>&ls`
//!
//! Anything else is "not a link". The id segment is only anchored at its
//! start, so trailing query parameters after `&ls` are tolerated.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Provider, ProviderTrackRef};
use crate::relay::traits::LinkParser;

/// Storefront-specific prefix every accepted link starts with
pub const DEFAULT_LINK_PREFIX: &str = "https://music.apple.com/ru/album/";

static IDS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\?i=([0-9]+)&ls").expect("ids pattern is valid"));

/// Parser for Apple Music album-track links
#[derive(Debug, Clone)]
pub struct AppleMusicLinkParser {
    link_prefix: String,
}

impl AppleMusicLinkParser {
    pub fn new(link_prefix: impl Into<String>) -> Self {
        Self {
            link_prefix: link_prefix.into(),
        }
    }

    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }
}

impl Default for AppleMusicLinkParser {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_PREFIX)
    }
}

impl LinkParser for AppleMusicLinkParser {
    fn provider(&self) -> Provider {
        Provider::AppleMusic
    }

    fn parse(&self, raw: &str) -> Option<ProviderTrackRef> {
        let rest = raw.strip_prefix(self.link_prefix.as_str())?;

        // <album-slug>/<ids>
        let mut parts = rest.split('/');
        let (Some(_slug), Some(ids), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };

        let captures = IDS_PATTERN.captures(ids)?;
        let collection_id = captures.get(1)?.as_str();
        let track_id = captures.get(2)?.as_str();

        Some(ProviderTrackRef {
            provider: Provider::AppleMusic,
            collection_id: collection_id.to_string(),
            track_id: track_id.to_string(),
            link: raw.to_string(),
        })
    }
}
