//! Core data models for link relaying.
//!
//! Defines the primary entities: [`Provider`], [`ProviderTrackRef`] and
//! [`MediaIdentity`]. A `MediaIdentity` lives for exactly one inbound message:
//! the resolver creates it, the matcher may attach one more link, and it is
//! dropped once the reply has been formatted.

use std::collections::BTreeMap;
use std::fmt;

/// A streaming service the relay knows how to talk to.
///
/// Source and target roles may overlap; the role is decided by which
/// component (parser/resolver or matcher) is wired up for the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Provider {
    AppleMusic,
    YandexMusic,
}

impl Provider {
    /// Human-readable name used in replies
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AppleMusic => "Apple Music",
            Self::YandexMusic => "Yandex Music",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of media an identity describes. Only single tracks are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Track,
}

/// Identifiers extracted from a provider deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTrackRef {
    /// Provider the link belongs to
    pub provider: Provider,
    /// Collection (album) id; kept for completeness, unused downstream
    pub collection_id: String,
    /// Provider-internal track id
    pub track_id: String,
    /// The raw link exactly as the user sent it
    pub link: String,
}

/// A resolved track plus every provider link known for it.
///
/// Track and album are fixed at construction; only the link map can grow,
/// and only through [`MediaIdentity::attach_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaIdentity {
    track: String,
    album: Option<String>,
    media_type: MediaType,
    origin: Provider,
    links: BTreeMap<Provider, String>,
}

impl MediaIdentity {
    /// Create an identity for a track resolved from `origin`.
    ///
    /// Returns `None` for an empty track title. An empty album title is
    /// normalised to `None`.
    pub fn new(
        track: impl Into<String>,
        album: Option<String>,
        origin: Provider,
        link: impl Into<String>,
    ) -> Option<Self> {
        let track = track.into();
        if track.is_empty() {
            return None;
        }

        let mut links = BTreeMap::new();
        links.insert(origin, link.into());

        Some(Self {
            track,
            album: album.filter(|a| !a.is_empty()),
            media_type: MediaType::Track,
            origin,
            links,
        })
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Provider the identity was resolved from
    pub fn origin(&self) -> Provider {
        self.origin
    }

    /// Link for `provider`, if one is known
    pub fn link(&self, provider: Provider) -> Option<&str> {
        self.links.get(&provider).map(String::as_str)
    }

    pub fn links(&self) -> &BTreeMap<Provider, String> {
        &self.links
    }

    /// Record the link for `provider`.
    ///
    /// Existing entries are never replaced; returns `false` if one was
    /// already present.
    pub fn attach_link(&mut self, provider: Provider, link: impl Into<String>) -> bool {
        if self.links.contains_key(&provider) {
            return false;
        }
        self.links.insert(provider, link.into());
        true
    }
}
